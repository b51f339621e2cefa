//! # chute-api
//!
//! REST API server for the Chute Inicial management backend, built on Axum.
//! Handlers are thin: they extract and validate input, call one service, and
//! map the result (or error) onto the wire format.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
