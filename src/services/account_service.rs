use crate::models::User;
use crate::repositories::{RepositoryError, UserRepository};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum AccountServiceError {
    #[error("Email already registered")]
    AlreadyRegistered,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

/// How passwords are stored and compared.
///
/// Callers only ever go through this trait, so swapping in a hashing scheme
/// touches nothing but the implementation handed to `AccountService`.
pub trait CredentialVerifier: Send + Sync {
    /// Turns a supplied password into the form kept in the `password` column.
    fn encode(&self, password: &str) -> String;
    /// Checks a supplied password against the stored form.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Stores passwords as typed and compares them for equality.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn encode(&self, password: &str) -> String {
        password.to_string()
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        password == stored
    }
}

pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Trims surrounding whitespace and lowercases.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub struct AccountService {
    repository: Arc<dyn UserRepository>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self::with_verifier(repository, Arc::new(PlaintextVerifier))
    }

    pub fn with_verifier(
        repository: Arc<dyn UserRepository>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            repository,
            verifier,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<User, AccountServiceError> {
        let email = normalize_email(&request.email);
        let password = self.verifier.encode(request.password.trim());

        match self.repository.create_user(&email, &password).await {
            Ok(user) => {
                tracing::info!("Registered user {} ({})", user.id, user.email);
                Ok(user)
            }
            Err(RepositoryError::AlreadyExists) => Err(AccountServiceError::AlreadyRegistered),
            Err(e) => Err(AccountServiceError::RepositoryError(e)),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<User, AccountServiceError> {
        let email = normalize_email(&request.email);

        let user = match self.repository.find_by_email(&email).await? {
            Some(user) if self.verifier.verify(request.password.trim(), &user.password) => user,
            _ => {
                tracing::debug!("Failed login attempt for {}", email);
                return Err(AccountServiceError::InvalidCredentials);
            }
        };

        tracing::info!("User {} logged in", user.id);
        Ok(user)
    }
}
