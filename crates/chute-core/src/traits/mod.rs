//! Repository and provider traits (ports)

mod repositories;

pub use repositories::{
    BatchOutcome, ChargeRepository, GuardianRepository, IdentityProvider, RepoResult,
    ScheduleRepository, StudentRepository,
};
