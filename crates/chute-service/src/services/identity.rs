//! Identity resolution
//!
//! Finds or creates the guardian identity behind a registration request.
//! Email is the natural key: resolving the same email twice always yields the
//! same identity, with name/phone refreshed in place.

use chute_common::auth::{generate_temp_password, hash_password};
use chute_core::{DomainError, Guardian, Role};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::GuardianInput;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Outcome of resolving a guardian identity
#[derive(Debug, Clone, Copy)]
pub struct ResolvedGuardian {
    pub id: Uuid,
    /// True when a new account with a temporary credential was provisioned
    pub temp_credential_issued: bool,
}

/// Identity resolution service
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    /// Create a new IdentityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Find or create the identity for a guardian, keyed by email.
    ///
    /// An existing account gets its profile refreshed (linked-student set
    /// untouched). A new account is provisioned with a temporary credential
    /// generated from the OS random source; the caller is told so it can ask
    /// the guardian to reset it.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn resolve_guardian(&self, input: &GuardianInput) -> ServiceResult<ResolvedGuardian> {
        let existing = self
            .ctx
            .identity_provider()
            .find_account_by_email(&input.email)
            .await?;

        match existing {
            Some(id) => {
                self.refresh_profile(id, input).await?;
                Ok(ResolvedGuardian {
                    id,
                    temp_credential_issued: false,
                })
            }
            None => self.provision_account(input).await,
        }
    }

    /// Refresh name/phone of an existing identity; recreate the profile row
    /// if it went missing while the account survived.
    async fn refresh_profile(&self, id: Uuid, input: &GuardianInput) -> ServiceResult<()> {
        let update = self
            .ctx
            .guardian_repo()
            .update_contact(id, &input.name, &input.email, &input.phone)
            .await;

        match update {
            Ok(()) => Ok(()),
            Err(DomainError::GuardianNotFound(_)) => {
                warn!(account_id = %id, "account exists without profile row, recreating");
                let guardian = Guardian::new(
                    id,
                    input.name.clone(),
                    input.email.clone(),
                    input.phone.clone(),
                    Role::Guardian,
                );
                self.ctx.guardian_repo().create(&guardian).await?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn provision_account(&self, input: &GuardianInput) -> ServiceResult<ResolvedGuardian> {
        let temp_password = generate_temp_password();
        let password_hash = hash_password(&temp_password).map_err(ServiceError::from)?;

        let id = Uuid::new_v4();
        let guardian = Guardian::new(
            id,
            input.name.clone(),
            input.email.clone(),
            input.phone.clone(),
            Role::Guardian,
        );

        // Profile first, then credential. If the profile already exists
        // without an account (a previous half-finished provision), adopt it.
        let id = match self.ctx.guardian_repo().create(&guardian).await {
            Ok(()) => id,
            Err(DomainError::EmailAlreadyExists) => {
                let orphan = self
                    .ctx
                    .guardian_repo()
                    .find_by_email(&input.email)
                    .await?
                    .ok_or_else(|| {
                        ServiceError::internal("profile vanished during identity resolution")
                    })?;
                warn!(guardian_id = %orphan.id, "profile exists without account, provisioning credential");
                orphan.id
            }
            Err(e) => return Err(e.into()),
        };

        self.ctx
            .identity_provider()
            .create_account(id, &input.email, &password_hash, true)
            .await?;

        info!(guardian_id = %id, "guardian identity provisioned with temporary credential");

        Ok(ResolvedGuardian {
            id,
            temp_credential_issued: true,
        })
    }
}
