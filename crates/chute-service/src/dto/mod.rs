//! Data transfer objects
//!
//! Requests deserialize the Portuguese wire format used by the frontend;
//! responses serialize back to it. Internals stay English via serde renames.

mod mappers;
mod requests;
mod responses;

pub use requests::{
    BatchIssueRequest, CreateAdminRequest, CreateScheduleRequest, GuardianInput,
    IssueChargeRequest, LoginRequest, RegisterStudentGuardianRequest, ResetPasswordRequest,
    RosterAttendanceRequest, RosterMark, SetAttendanceRequest, StudentInput, UpdateStudentRequest,
};
pub use responses::{
    AttendanceHistoryResponse, BatchBillingSummary, ChargeResponse, GuardianResponse,
    LoginResponse, OperationMessage, ProfileResponse, RegistrationResponse, ScheduleResponse,
    StudentDetailResponse, StudentResponse,
};
