use crate::domain::model::{AuthResult, Credentials};
use crate::domain::ports::CredentialVerifier;

pub const DEMO_EMAIL: &str = "test@email.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_TOKEN: &str = "fake-jwt-token";

/// A single fixed account. Plain equality on both fields.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    email: &'static str,
    password: &'static str,
    token: &'static str,
}

impl StaticCredentials {
    pub fn new(email: &'static str, password: &'static str, token: &'static str) -> Self {
        Self {
            email,
            password,
            token,
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD, DEMO_TOKEN)
    }
}

impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, credentials: &Credentials) -> AuthResult {
        let matches = credentials.email.as_deref() == Some(self.email)
            && credentials.password.as_deref() == Some(self.password);

        if matches {
            AuthResult::Success {
                token: self.token.to_string(),
            }
        } else {
            AuthResult::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: Option<&str>, password: Option<&str>) -> Credentials {
        Credentials {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_demo_pair_succeeds() {
        let verifier = StaticCredentials::default();
        let result = verifier
            .verify(&creds(Some("test@email.com"), Some("password123")))
            .await;
        assert_eq!(
            result,
            AuthResult::Success {
                token: "fake-jwt-token".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_comparison_is_exact() {
        let verifier = StaticCredentials::default();
        let rejected = [
            creds(Some("TEST@email.com"), Some("password123")),
            creds(Some("test@email.com"), Some("Password123")),
            creds(Some("test@email.com "), Some("password123")),
            creds(Some("test@email.com"), None),
            creds(None, Some("password123")),
            creds(None, None),
        ];

        for candidate in &rejected {
            assert_eq!(
                verifier.verify(candidate).await,
                AuthResult::Failure,
                "{:?}",
                candidate
            );
        }
    }

    #[tokio::test]
    async fn test_custom_account() {
        let verifier = StaticCredentials::new("a@b.c", "pw", "tok");
        assert_eq!(
            verifier.verify(&creds(Some("a@b.c"), Some("pw"))).await,
            AuthResult::Success {
                token: "tok".to_string()
            }
        );
    }
}
