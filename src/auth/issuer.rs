//! Credential issuer: validates a claimed identity and secret, mints tokens.

use thiserror::Error;

use crate::auth::token::{IssuedToken, TokenService};
use crate::domain::Principal;
use crate::error::CmsError;
use crate::storage::CmsRepository;

/// Internal failure taxonomy for issuance.
///
/// `UnknownPrincipal` and `InvalidSecret` are collapsed into one uniform
/// response at the API boundary so callers cannot enumerate accounts.
/// `Infrastructure` stays distinct so operators can tell an outage from a
/// bad login.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("unknown principal")]
    UnknownPrincipal,
    #[error("invalid secret")]
    InvalidSecret,
    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl From<IssueError> for CmsError {
    fn from(err: IssueError) -> Self {
        match err {
            // Uniform external shape for both credential failures.
            IssueError::UnknownPrincipal | IssueError::InvalidSecret => {
                CmsError::Unauthorized("Invalid email or password".to_string())
            }
            IssueError::Infrastructure(msg) => CmsError::Infrastructure(msg),
        }
    }
}

/// Issues signed, time-bounded access tokens against the credential store.
///
/// Side effects: one store read per call. No counters, no lockout, no writes.
#[derive(Clone)]
pub struct CredentialIssuer {
    repository: CmsRepository,
    tokens: TokenService,
}

impl CredentialIssuer {
    pub fn new(repository: CmsRepository, tokens: TokenService) -> Self {
        Self { repository, tokens }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Validate `(email, password)` and mint a token on success.
    pub async fn issue(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Principal, IssuedToken), IssueError> {
        if email.is_empty() || password.is_empty() {
            return Err(IssueError::InvalidSecret);
        }

        let principal = self
            .repository
            .find_principal_by_email(email)
            .await
            .map_err(|e| IssueError::Infrastructure(e.to_string()))?
            .ok_or(IssueError::UnknownPrincipal)?;

        if !principal.verify_password(password) {
            return Err(IssueError::InvalidSecret);
        }

        let issued = self
            .tokens
            .issue(&principal.email)
            .map_err(|e| IssueError::Infrastructure(e.to_string()))?;

        Ok((principal, issued))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePool;

    async fn issuer_with_seeded_admin() -> CredentialIssuer {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        let repository = CmsRepository::new(pool);
        repository.init_schema().await.unwrap();

        let hash = Principal::hash_password("s3cret-password").unwrap();
        let principal = Principal::new(
            "admin@example.com".to_string(),
            "Admin".to_string(),
            hash,
        );
        repository.create_principal(&principal).await.unwrap();

        CredentialIssuer::new(
            repository,
            TokenService::new(
                "0123456789abcdef0123456789abcdef",
                "academy-cms".to_string(),
                24,
            ),
        )
    }

    #[tokio::test]
    async fn test_issue_for_valid_credentials() {
        let issuer = issuer_with_seeded_admin().await;

        let (principal, issued) = issuer
            .issue("admin@example.com", "s3cret-password")
            .await
            .unwrap();

        assert_eq!(principal.email, "admin@example.com");
        assert_eq!(issued.claims.sub, "admin@example.com");
        assert_eq!(issued.claims.role, "admin");
        assert_eq!(issued.claims.exp - issued.claims.iat, 24 * 3600);
    }

    #[tokio::test]
    async fn test_credential_failures_are_uniform_externally() {
        let issuer = issuer_with_seeded_admin().await;

        let unknown = issuer
            .issue("nobody@example.com", "s3cret-password")
            .await
            .unwrap_err();
        let wrong = issuer
            .issue("admin@example.com", "wrong-password")
            .await
            .unwrap_err();

        // Internally distinguishable...
        assert!(matches!(unknown, IssueError::UnknownPrincipal));
        assert!(matches!(wrong, IssueError::InvalidSecret));

        // ...but identical once mapped to the API error.
        let unknown_ext = CmsError::from(unknown).to_string();
        let wrong_ext = CmsError::from(wrong).to_string();
        assert_eq!(unknown_ext, wrong_ext);
    }

    #[tokio::test]
    async fn test_empty_inputs_rejected() {
        let issuer = issuer_with_seeded_admin().await;
        assert!(issuer.issue("", "s3cret-password").await.is_err());
        assert!(issuer.issue("admin@example.com", "").await.is_err());
    }
}
