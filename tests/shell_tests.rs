use quizdb::{
    repositories::{QuizRepository, SqliteQuizRepository, SqliteScoreRepository},
    services::ResultsService,
    shell::Shell,
    test_utils::test_helpers,
};
use std::sync::Arc;

async fn python_answers(pool: &sqlx::SqlitePool) -> Vec<String> {
    let repository = SqliteQuizRepository::new(pool.clone());
    let quizzes = repository.list_quizzes().await.unwrap();
    let names: Vec<&str> = quizzes.iter().map(|q| q.name.as_str()).collect();
    assert_eq!(names, vec!["Python", "DBMS", "DSA"]);

    repository
        .list_questions(quizzes[0].id)
        .await
        .unwrap()
        .iter()
        .map(|q| q.options.ordinal_of(&q.answer).unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_register_login_quiz_and_results() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let answers = python_answers(&pool).await;

    let mut script = vec!["1", "a@b.com", "pw", "2", "a@b.com", "pw", "3", "1"];
    script.extend(answers.iter().map(String::as_str));
    script.extend(["4", "5"]);
    let mut console = test_helpers::scripted_console(&script);

    let mut shell = Shell::new(pool.clone());
    shell.run(&mut console).await.unwrap();

    let output = console.output();
    assert!(output.contains("Registration successful!"));
    assert!(output.contains("Login successful!"));
    assert!(output.contains("You scored 5/5!"));
    assert!(output.contains("Your Quiz Results:\nQuiz: Python, Score: 5"));
    assert!(output.ends_with("Goodbye!\n"));

    let user_id = shell.context().current_user.unwrap();
    let results = ResultsService::new(Arc::new(SqliteScoreRepository::new(pool)))
        .get_results(user_id)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].quiz_name, "Python");
    assert_eq!(results[0].score, 5);
}

#[tokio::test]
async fn test_quiz_and_results_require_login() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let mut console = test_helpers::scripted_console(&["3", "4", "5"]);

    let mut shell = Shell::new(pool.clone());
    shell.run(&mut console).await.unwrap();

    assert_eq!(console.output().matches("Please log in first!").count(), 2);
    assert!(!console.output().contains("Available Quizzes:"));
    assert_eq!(
        test_helpers::count_rows(&pool, "user_scores").await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_duplicate_registration_is_reported() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let mut console = test_helpers::scripted_console(&[
        "1",
        "a@b.com",
        "pw",
        "1",
        " A@B.COM ",
        "other",
        "5",
    ]);

    let mut shell = Shell::new(pool.clone());
    shell.run(&mut console).await.unwrap();

    let output = console.output();
    assert!(output.contains("Registration successful!"));
    assert!(output.contains("Email already registered!"));
    assert_eq!(test_helpers::count_rows(&pool, "users").await.unwrap(), 1);
}

#[tokio::test]
async fn test_failed_login_clears_current_user() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::insert_test_user(&pool, "a@b.com", "pw")
        .await
        .unwrap();
    let mut console = test_helpers::scripted_console(&[
        "2", "a@b.com", "pw", "2", "a@b.com", "wrong", "4", "5",
    ]);

    let mut shell = Shell::new(pool);
    shell.run(&mut console).await.unwrap();

    let output = console.output();
    assert!(output.contains("Login successful!"));
    assert!(output.contains("Invalid email or password."));
    assert!(output.contains("Please log in first!"));
    assert_eq!(shell.context().current_user, None);
}

#[tokio::test]
async fn test_show_results_without_attempts() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let user_id = test_helpers::insert_test_user(&pool, "a@b.com", "pw")
        .await
        .unwrap();
    let mut console = test_helpers::scripted_console(&["2", "a@b.com", "pw", "4", "5"]);

    let mut shell = Shell::new(pool);
    shell.run(&mut console).await.unwrap();

    assert!(console.output().contains("No quiz attempts found."));
    assert_eq!(shell.context().current_user, Some(user_id));
}

#[tokio::test]
async fn test_invalid_options_reprompt_until_exit() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let mut console = test_helpers::scripted_console(&["9", "", "register", "5", "1"]);

    let mut shell = Shell::new(pool);
    shell.run(&mut console).await.unwrap();

    let output = console.output();
    assert_eq!(output.matches("Invalid option. Try again.").count(), 3);
    // Input after Exit is never read
    assert!(!output.contains("Enter your email: "));
}

#[tokio::test]
async fn test_end_of_input_leaves_the_menu() {
    let pool = test_helpers::create_test_db().await.unwrap();
    let mut console = test_helpers::scripted_console(&["6"]);

    let mut shell = Shell::new(pool);
    shell.run(&mut console).await.unwrap();

    assert!(console.output().contains("Invalid option. Try again."));
    assert!(!console.output().contains("Goodbye!"));
}

#[tokio::test]
async fn test_storage_fault_is_reported_and_menu_continues() {
    let pool = test_helpers::create_test_db().await.unwrap();
    test_helpers::insert_test_user(&pool, "a@b.com", "pw")
        .await
        .unwrap();
    sqlx::query("DROP TABLE user_scores")
        .execute(&pool)
        .await
        .unwrap();

    let mut console = test_helpers::scripted_console(&[
        "2", "a@b.com", "pw", "4", "3", "1", "1", "1", "1", "1", "1", "5",
    ]);

    let mut shell = Shell::new(pool);
    shell.run(&mut console).await.unwrap();

    let output = console.output();
    // Once for Show Results, once when the quiz score is saved
    assert_eq!(output.matches("Something went wrong").count(), 2);
    assert!(output.contains("You scored"));
    assert!(output.ends_with("Goodbye!\n"));
    assert!(shell.context().current_user.is_some());
}
