//! Schema creation and reference data.
//!
//! Both operations are additive: tables are only created when missing and
//! seed rows are inserted with `INSERT OR IGNORE` against unique keys, so
//! they can run on every start-up. Each one runs inside a single
//! transaction which rolls back if any statement fails.

use crate::config::AppConfig;
use crate::db;
use sqlx::SqlitePool;

const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL,
        created_at TEXT DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS quizzes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT UNIQUE NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS quiz_questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        quiz_id INTEGER NOT NULL,
        question TEXT NOT NULL,
        options TEXT NOT NULL,
        answer TEXT NOT NULL,
        FOREIGN KEY (quiz_id) REFERENCES quizzes (id),
        UNIQUE (quiz_id, question)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_scores (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        quiz_id INTEGER NOT NULL,
        score INTEGER NOT NULL CHECK (score >= 0),
        taken_at TEXT DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (user_id) REFERENCES users (id),
        FOREIGN KEY (quiz_id) REFERENCES quizzes (id)
    )
    "#,
];

/// A seeded question: owning quiz name, text, delimited options, answer.
pub struct SeedQuestion {
    pub quiz: &'static str,
    pub question: &'static str,
    pub options: &'static str,
    pub answer: &'static str,
}

pub const SEED_QUIZZES: [&str; 3] = ["Python", "DBMS", "DSA"];

pub const SEED_QUESTIONS: [SeedQuestion; 15] = [
    SeedQuestion {
        quiz: "Python",
        question: "Which of the following is a Python keyword?",
        options: "for,foreach,loop,repeat",
        answer: "for",
    },
    SeedQuestion {
        quiz: "Python",
        question: "What is the output of `print(10 // 3)`?",
        options: "3,3.3,Error,None",
        answer: "3",
    },
    SeedQuestion {
        quiz: "Python",
        question: "What does the `len()` function do?",
        options: "Returns length,Sorts list,Reverses list,Checks type",
        answer: "Returns length",
    },
    SeedQuestion {
        quiz: "Python",
        question: "Which library is commonly used for numerical computation in Python?",
        options: "numpy,flask,django,pandas",
        answer: "numpy",
    },
    SeedQuestion {
        quiz: "Python",
        question: "What is the purpose of `if __name__ == '__main__':`?",
        options: "Execute code,Import module,Define variable,Start loop",
        answer: "Execute code",
    },
    SeedQuestion {
        quiz: "DBMS",
        question: "Which of the following is NOT an SQL command?",
        options: "UPDATE,SELECT,MODIFY,DELETE",
        answer: "MODIFY",
    },
    SeedQuestion {
        quiz: "DBMS",
        question: "What is a foreign key used for?",
        options: "Data redundancy,Data security,Establish relationship,Define index",
        answer: "Establish relationship",
    },
    // Answer kept as seeded
    SeedQuestion {
        quiz: "DBMS",
        question: "Which normal form removes partial dependency?",
        options: "1NF,2NF,3NF,BCNF",
        answer: "2NF",
    },
    SeedQuestion {
        quiz: "DBMS",
        question: "Which database model uses tables to represent data?",
        options: "Hierarchical,Relational,Object-Oriented,Network",
        answer: "Relational",
    },
    SeedQuestion {
        quiz: "DBMS",
        question: "What is the main purpose of indexing?",
        options: "Speed up queries,Normalize data,Reduce redundancy,Secure data",
        answer: "Speed up queries",
    },
    SeedQuestion {
        quiz: "DSA",
        question: "What is the time complexity of linear search?",
        options: "O(1),O(n),O(log n),O(n^2)",
        answer: "O(n)",
    },
    SeedQuestion {
        quiz: "DSA",
        question: "Which data structure uses FIFO (First In, First Out)?",
        options: "Queue,Stack,Graph,Tree",
        answer: "Queue",
    },
    SeedQuestion {
        quiz: "DSA",
        question: "Which algorithm finds the shortest path in a graph?",
        options: "Dijkstra's,Bubble Sort,DFS,Insertion Sort",
        answer: "Dijkstra's",
    },
    SeedQuestion {
        quiz: "DSA",
        question: "What is a binary tree with every level filled called?",
        options: "Full tree,Complete tree,AVL tree,BST",
        answer: "Complete tree",
    },
    SeedQuestion {
        quiz: "DSA",
        question: "Which data structure is ideal for implementing recursion?",
        options: "Queue,Stack,Array,Linked List",
        answer: "Stack",
    },
];

pub async fn initialize_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::debug!("Schema ready");
    Ok(())
}

pub async fn seed_reference_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for name in SEED_QUIZZES {
        inserted += sqlx::query("INSERT OR IGNORE INTO quizzes (name) VALUES (?)")
            .bind(name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    for seed in &SEED_QUESTIONS {
        inserted += sqlx::query(
            r#"
            INSERT OR IGNORE INTO quiz_questions (quiz_id, question, options, answer)
            SELECT id, ?, ?, ? FROM quizzes WHERE name = ?
            "#,
        )
        .bind(seed.question)
        .bind(seed.options)
        .bind(seed.answer)
        .bind(seed.quiz)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;

    if inserted > 0 {
        tracing::info!("Seeded {} reference rows", inserted);
    }
    Ok(())
}

/// Opens the configured database and brings it to a usable state.
pub async fn open_store(config: &AppConfig) -> crate::error::Result<SqlitePool> {
    let pool = db::create_pool(config).await?;
    initialize_schema(&pool).await?;
    seed_reference_data(&pool).await?;
    Ok(pool)
}
