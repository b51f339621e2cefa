//! Service context - dependency container for services
//!
//! Holds repositories, the identity provider, and shared configuration.
//! Everything is injected explicitly; there is no process-wide state.

use std::sync::Arc;

use chute_common::auth::JwtService;
use chute_common::BillingConfig;
use chute_core::traits::{
    ChargeRepository, GuardianRepository, IdentityProvider, ScheduleRepository, StudentRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    guardian_repo: Arc<dyn GuardianRepository>,
    student_repo: Arc<dyn StudentRepository>,
    charge_repo: Arc<dyn ChargeRepository>,
    schedule_repo: Arc<dyn ScheduleRepository>,
    identity_provider: Arc<dyn IdentityProvider>,
    jwt_service: Arc<JwtService>,
    billing: BillingConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        guardian_repo: Arc<dyn GuardianRepository>,
        student_repo: Arc<dyn StudentRepository>,
        charge_repo: Arc<dyn ChargeRepository>,
        schedule_repo: Arc<dyn ScheduleRepository>,
        identity_provider: Arc<dyn IdentityProvider>,
        jwt_service: Arc<JwtService>,
        billing: BillingConfig,
    ) -> Self {
        Self {
            guardian_repo,
            student_repo,
            charge_repo,
            schedule_repo,
            identity_provider,
            jwt_service,
            billing,
        }
    }

    /// Get the guardian repository
    pub fn guardian_repo(&self) -> &dyn GuardianRepository {
        self.guardian_repo.as_ref()
    }

    /// Get the student repository
    pub fn student_repo(&self) -> &dyn StudentRepository {
        self.student_repo.as_ref()
    }

    /// Get the charge repository
    pub fn charge_repo(&self) -> &dyn ChargeRepository {
        self.charge_repo.as_ref()
    }

    /// Get the schedule repository
    pub fn schedule_repo(&self) -> &dyn ScheduleRepository {
        self.schedule_repo.as_ref()
    }

    /// Get the identity provider
    pub fn identity_provider(&self) -> &dyn IdentityProvider {
        self.identity_provider.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the billing configuration
    pub fn billing(&self) -> &BillingConfig {
        &self.billing
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("billing", &self.billing)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    guardian_repo: Option<Arc<dyn GuardianRepository>>,
    student_repo: Option<Arc<dyn StudentRepository>>,
    charge_repo: Option<Arc<dyn ChargeRepository>>,
    schedule_repo: Option<Arc<dyn ScheduleRepository>>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
    jwt_service: Option<Arc<JwtService>>,
    billing: Option<BillingConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guardian_repo(mut self, repo: Arc<dyn GuardianRepository>) -> Self {
        self.guardian_repo = Some(repo);
        self
    }

    pub fn student_repo(mut self, repo: Arc<dyn StudentRepository>) -> Self {
        self.student_repo = Some(repo);
        self
    }

    pub fn charge_repo(mut self, repo: Arc<dyn ChargeRepository>) -> Self {
        self.charge_repo = Some(repo);
        self
    }

    pub fn schedule_repo(mut self, repo: Arc<dyn ScheduleRepository>) -> Self {
        self.schedule_repo = Some(repo);
        self
    }

    pub fn identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity_provider = Some(provider);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn billing(mut self, billing: BillingConfig) -> Self {
        self.billing = Some(billing);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.guardian_repo
                .ok_or_else(|| ServiceError::validation("guardian_repo is required"))?,
            self.student_repo
                .ok_or_else(|| ServiceError::validation("student_repo is required"))?,
            self.charge_repo
                .ok_or_else(|| ServiceError::validation("charge_repo is required"))?,
            self.schedule_repo
                .ok_or_else(|| ServiceError::validation("schedule_repo is required"))?,
            self.identity_provider
                .ok_or_else(|| ServiceError::validation("identity_provider is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.billing
                .ok_or_else(|| ServiceError::validation("billing config is required"))?,
        ))
    }
}
