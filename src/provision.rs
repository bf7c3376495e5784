use thiserror::Error;
use tracing::{info, instrument};

use crate::config::AdminAccount;
use crate::users::password::hash_password;
use crate::users::repo::{StoreError, UserStore};
use crate::users::repo_types::{NewUser, UserUpdate, DEFAULT_LIFE_EXPECTANCY};

/// What the run did to the target account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    Updated,
}

impl std::fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProvisionOutcome::Created => write!(f, "created"),
            ProvisionOutcome::Updated => write!(f, "updated"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Ensure exactly one admin account exists for the configured email.
///
/// Idempotent: a second run converges to the same end state (the stored hash
/// differs per run because of the fresh salt, but identity and privilege
/// fields are stable). The hash and the admin flag land in one store write,
/// so a failure leaves either the previous record or nothing.
#[instrument(skip(store, admin))]
pub async fn provision_admin(
    store: &dyn UserStore,
    admin: &AdminAccount,
) -> Result<ProvisionOutcome, ProvisionError> {
    let email = admin.email.trim().to_lowercase();

    let password_hash =
        hash_password(&admin.password).map_err(|e| ProvisionError::Hashing(e.to_string()))?;

    match store.find_by_email(&email).await? {
        Some(existing) => {
            let user = store
                .update(
                    &email,
                    UserUpdate {
                        password_hash,
                        name: admin.name.clone(),
                        is_admin: true,
                    },
                )
                .await?;
            info!(user_id = %user.id, email = %user.email, was_admin = existing.is_admin, "existing user promoted to admin");
            Ok(ProvisionOutcome::Updated)
        }
        None => {
            let user = store
                .insert(NewUser {
                    email,
                    password_hash,
                    name: admin.name.clone(),
                    is_admin: true,
                    onboarding_completed: false,
                    life_expectancy: DEFAULT_LIFE_EXPECTANCY,
                })
                .await?;
            info!(user_id = %user.id, email = %user.email, "admin user created");
            Ok(ProvisionOutcome::Created)
        }
    }
}
