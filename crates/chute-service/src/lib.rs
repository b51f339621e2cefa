//! # chute-service
//!
//! Application layer: request/response DTOs and the services implementing
//! registration, linkage, attendance, billing, schedules, and authentication.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AttendanceHistoryResponse, BatchBillingSummary, BatchIssueRequest, ChargeResponse,
    CreateAdminRequest, CreateScheduleRequest, GuardianInput, GuardianResponse,
    IssueChargeRequest, LoginRequest, LoginResponse, OperationMessage, ProfileResponse,
    RegisterStudentGuardianRequest, RegistrationResponse, ResetPasswordRequest,
    RosterAttendanceRequest, RosterMark, ScheduleResponse, SetAttendanceRequest,
    StudentDetailResponse, StudentInput, StudentResponse, UpdateStudentRequest,
};
pub use services::{
    AttendanceService, AuthService, BillingService, IdentityService, IssueOutcome, LinkageService,
    RegistrationService, ResolvedGuardian, ScheduleService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StudentService,
};

#[cfg(test)]
pub(crate) mod test_support;
