use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

const MIN_PASSWORD_LEN: usize = 8;

/// Target account parameters. Sourced from the environment, never compiled in.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    pub database_url: String,
    pub admin: AdminAccount,
}

impl SeedConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL not set"))?;

        let email = std::env::var("ADMIN_EMAIL")
            .map_err(|_| anyhow::anyhow!("ADMIN_EMAIL not set"))?
            .trim()
            .to_lowercase();
        if !is_valid_email(&email) {
            anyhow::bail!("ADMIN_EMAIL is not a valid email address");
        }

        let password =
            std::env::var("ADMIN_PASSWORD").map_err(|_| anyhow::anyhow!("ADMIN_PASSWORD not set"))?;
        if password.len() < MIN_PASSWORD_LEN {
            // Length only; the value itself must never reach a diagnostic.
            anyhow::bail!("ADMIN_PASSWORD must be at least {MIN_PASSWORD_LEN} characters");
        }

        let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrator".into());

        Ok(Self {
            database_url,
            admin: AdminAccount {
                email,
                password,
                name,
            },
        })
    }
}
