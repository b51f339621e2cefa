//! # chute-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! This crate provides PostgreSQL implementations for the repository and
//! identity-provider traits defined in `chute-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The guardian linked-student set and the attendance table are mutated with
//! single-statement atomic primitives so concurrent writers cannot lose each
//! other's updates.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgChargeRepository, PgGuardianRepository, PgIdentityProvider, PgScheduleRepository,
    PgStudentRepository,
};
