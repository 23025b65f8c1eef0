use quizdb::{
    repositories::SqliteUserRepository,
    services::account_service::{AccountService, AccountServiceError, LoginRequest, RegisterRequest},
    test_utils::test_helpers,
};
use std::sync::Arc;

fn register_request(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_success() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = AccountService::new(repository);

    let user = service
        .register(register_request("  New@Example.COM ", "secret"))
        .await
        .unwrap();

    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.password, "secret");
    assert!(user.created_at.is_some());
}

#[tokio::test]
async fn test_register_duplicate_normalized_email() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let service = AccountService::new(repository);

    service
        .register(register_request("dup@example.com", "one"))
        .await
        .unwrap();

    let result = service
        .register(register_request(" DUP@example.com", "two"))
        .await;

    assert!(matches!(result, Err(AccountServiceError::AlreadyRegistered)));
    assert_eq!(test_helpers::count_rows(&pool, "users").await.unwrap(), 1);
}

#[tokio::test]
async fn test_login_returns_registered_user() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = AccountService::new(repository);

    let accounts = [
        ("first@example.com", "alpha"),
        ("second@example.com", "beta"),
        ("third@example.com", "gamma"),
    ];

    let mut ids = Vec::new();
    for (email, password) in accounts {
        ids.push(service.register(register_request(email, password)).await.unwrap().id);
    }

    for ((email, password), id) in accounts.iter().zip(ids) {
        let user = service.login(login_request(email, password)).await.unwrap();
        assert_eq!(user.id, id);
    }

    // Same normalization as registration
    let user = service
        .login(login_request(" FIRST@example.com ", "alpha"))
        .await
        .unwrap();
    assert_eq!(user.email, "first@example.com");
}

#[tokio::test]
async fn test_login_rejects_mismatches() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let repository = Arc::new(SqliteUserRepository::new(pool));
    let service = AccountService::new(repository);

    service
        .register(register_request("a@b.com", "pw"))
        .await
        .unwrap();

    for (email, password) in [
        ("a@b.com", "PW"),
        ("a@b.com", ""),
        ("a@b.com", "pw2"),
        ("unknown@b.com", "pw"),
    ] {
        let result = service.login(login_request(email, password)).await;
        assert!(
            matches!(result, Err(AccountServiceError::InvalidCredentials)),
            "{} / {}",
            email,
            password
        );
    }
}
