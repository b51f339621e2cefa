//! Authentication
//!
//! Login against the identity provider, password-reset requests, and admin
//! account creation. Reset requests never reveal whether an email is
//! registered.

use chute_common::auth::{hash_password, verify_password};
use chute_common::AppError;
use chute_core::{Guardian, Role};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{
    CreateAdminRequest, GuardianResponse, LoginRequest, LoginResponse, OperationMessage,
    ProfileResponse, ResetPasswordRequest, StudentResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let account_id = self
            .ctx
            .identity_provider()
            .find_account_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .identity_provider()
            .password_hash(account_id)
            .await?
            .ok_or_else(|| {
                warn!(account_id = %account_id, "login failed: no stored credential");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid =
            verify_password(&request.password, &password_hash).map_err(ServiceError::from)?;
        if !is_valid {
            warn!(account_id = %account_id, "login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let guardian = self
            .ctx
            .guardian_repo()
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Guardian", account_id.to_string()))?;

        let token = self
            .ctx
            .jwt_service()
            .generate_access_token(guardian.id, guardian.role)
            .map_err(ServiceError::from)?;

        info!(account_id = %account_id, role = %guardian.role, "login succeeded");

        Ok(LoginResponse::new(
            token,
            self.ctx.jwt_service().expires_in(),
            GuardianResponse::from(&guardian),
        ))
    }

    /// Request a password reset.
    ///
    /// Always acknowledges with the same message; the credential is flagged
    /// for reset only when the email matches an account. Delivery of the
    /// reset link is out-of-band.
    #[instrument(skip(self, request))]
    pub async fn request_password_reset(
        &self,
        request: ResetPasswordRequest,
    ) -> ServiceResult<OperationMessage> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        if let Some(account_id) = self
            .ctx
            .identity_provider()
            .find_account_by_email(&request.email)
            .await?
        {
            self.ctx
                .identity_provider()
                .mark_reset_required(account_id)
                .await?;
            info!(account_id = %account_id, "password reset requested");
        }

        Ok(OperationMessage::new(
            "Se o email estiver cadastrado, você receberá as instruções de redefinição.",
        ))
    }

    /// Profile of the authenticated account with its linked students.
    ///
    /// Students are read through the guardian's linked set; a dangling ID is
    /// logged and skipped rather than failing the whole profile.
    #[instrument(skip(self))]
    pub async fn profile(&self, account_id: Uuid) -> ServiceResult<ProfileResponse> {
        let guardian = self
            .ctx
            .guardian_repo()
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Guardian", account_id.to_string()))?;

        let mut students = Vec::with_capacity(guardian.student_ids.len());
        for student_id in &guardian.student_ids {
            match self.ctx.student_repo().find_by_id(*student_id).await? {
                Some(student) => students.push(StudentResponse::from(&student)),
                None => {
                    warn!(student_id = %student_id, "linked student record missing, skipping");
                }
            }
        }

        Ok(ProfileResponse {
            guardian: GuardianResponse::from(&guardian),
            students,
        })
    }

    /// Create an administrator account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_admin(&self, request: CreateAdminRequest) -> ServiceResult<GuardianResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        if self
            .ctx
            .identity_provider()
            .find_account_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict("Email já cadastrado"));
        }

        let password_hash = hash_password(&request.password).map_err(ServiceError::from)?;

        let admin = Guardian::new(
            Uuid::new_v4(),
            request.name,
            request.email.clone(),
            request.phone,
            Role::Admin,
        );
        self.ctx.guardian_repo().create(&admin).await?;
        self.ctx
            .identity_provider()
            .create_account(admin.id, &request.email, &password_hash, false)
            .await?;

        info!(account_id = %admin.id, "admin account created");

        Ok(GuardianResponse::from(&admin))
    }
}
