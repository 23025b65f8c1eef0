pub mod account_service;
pub mod quiz_catalog;
pub mod quiz_session;
pub mod results_service;

pub use account_service::{
    AccountService, AccountServiceError, CredentialVerifier, LoginRequest, PlaintextVerifier,
    RegisterRequest,
};
pub use quiz_catalog::{InvalidChoice, QuizCatalog};
pub use quiz_session::{Attempt, QuizSession, QuizSessionError, SessionOutcome};
pub use results_service::{ResultsService, ResultsServiceError};
