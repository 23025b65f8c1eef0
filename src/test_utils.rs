pub mod test_helpers {
    use crate::console::LineConsole;
    use crate::storage;
    use sqlx::{
        sqlite::{SqliteConnectOptions, SqlitePoolOptions},
        SqlitePool,
    };
    use std::{io::Cursor, str::FromStr};
    use tempfile::NamedTempFile;

    /// Console fed from a fixed script, capturing everything printed.
    pub type ScriptedConsole = LineConsole<Cursor<String>, Vec<u8>>;

    /// Builds a console whose input is `lines`, one per prompt.
    pub fn scripted_console(lines: &[&str]) -> ScriptedConsole {
        let mut input = lines.join("\n");
        if !lines.is_empty() {
            input.push('\n');
        }
        LineConsole::new(Cursor::new(input), Vec::new())
    }

    /// Create a new in-memory SQLite database with schema and seed data
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = create_empty_test_db().await?;
        storage::seed_reference_data(&pool).await?;
        Ok(pool)
    }

    /// In-memory database with the schema but no reference data
    pub async fn create_empty_test_db() -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        // A single connection that never idles out keeps the in-memory db alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        storage::initialize_schema(&pool).await?;

        Ok(pool)
    }

    /// Create a temporary file-based SQLite database for testing
    /// Useful when a test needs to reopen the same store
    pub async fn create_test_db_file() -> Result<(SqlitePool, NamedTempFile), sqlx::Error> {
        let temp_file = NamedTempFile::new().map_err(sqlx::Error::Io)?;
        let pool = open_test_db_file(&temp_file).await?;
        Ok((pool, temp_file))
    }

    /// Opens (without initializing) a pool over an existing temp file
    pub async fn open_test_db_file(temp_file: &NamedTempFile) -> Result<SqlitePool, sqlx::Error> {
        let db_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| sqlx::Error::Configuration("Invalid database path".into()))?;
        let config = crate::config::AppConfig::with_database_url(format!("sqlite://{}", db_path));
        crate::db::create_pool(&config).await
    }

    /// Insert a test user directly, bypassing the account service
    pub async fn insert_test_user(
        pool: &SqlitePool,
        email: &str,
        password: &str,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind(email)
            .bind(password)
            .execute(pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a quiz with the given questions as (text, options, answer)
    pub async fn insert_test_quiz(
        pool: &SqlitePool,
        name: &str,
        questions: &[(&str, &str, &str)],
    ) -> Result<i64, sqlx::Error> {
        let quiz_id = sqlx::query("INSERT INTO quizzes (name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await?
            .last_insert_rowid();

        for &(question, options, answer) in questions {
            sqlx::query(
                "INSERT INTO quiz_questions (quiz_id, question, options, answer) VALUES (?, ?, ?, ?)",
            )
            .bind(quiz_id)
            .bind(question)
            .bind(options)
            .bind(answer)
            .execute(pool)
            .await?;
        }

        Ok(quiz_id)
    }

    /// Row count of one table
    pub async fn count_rows(pool: &SqlitePool, table: &str) -> Result<i64, sqlx::Error> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        sqlx::query_scalar(&sql).fetch_one(pool).await
    }
}

// Re-export commonly used test functions at module level for convenience
// Note: This is test-only code. Panic on error is acceptable in tests.
#[cfg(test)]
pub async fn create_test_pool() -> sqlx::SqlitePool {
    match test_helpers::create_test_db().await {
        Ok(pool) => pool,
        Err(e) => panic!("Failed to create test pool: {}", e),
    }
}
