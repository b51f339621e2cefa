//! Application services
//!
//! Each service is a thin struct borrowing the shared `ServiceContext` and
//! exposing the use cases of one area.

mod attendance;
mod auth;
mod billing;
mod context;
mod error;
mod identity;
mod linkage;
mod registration;
mod schedule;
mod student;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use billing::{BillingService, IssueOutcome};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use identity::{IdentityService, ResolvedGuardian};
pub use linkage::LinkageService;
pub use registration::RegistrationService;
pub use schedule::ScheduleService;
pub use student::StudentService;
