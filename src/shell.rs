//! Top-level interactive menu.

use crate::console::Console;
use crate::error::Result;
use crate::models::UserId;
use crate::repositories::{SqliteQuizRepository, SqliteScoreRepository, SqliteUserRepository};
use crate::services::{
    AccountService, AccountServiceError, LoginRequest, QuizSession, QuizSessionError,
    RegisterRequest, ResultsService,
};
use sqlx::SqlitePool;
use std::sync::Arc;

const MENU: &str = "\n1. Register\n2. Login\n3. Take Quiz\n4. Show Results\n5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Login,
    TakeQuiz,
    ShowResults,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::Login),
            "3" => Some(MenuChoice::TakeQuiz),
            "4" => Some(MenuChoice::ShowResults),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Per-process session state. Lives only as long as the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub current_user: Option<UserId>,
}

enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    accounts: AccountService,
    quiz_session: QuizSession,
    results: ResultsService,
    context: SessionContext,
}

impl Shell {
    pub fn new(pool: SqlitePool) -> Self {
        let users = Arc::new(SqliteUserRepository::new(pool.clone()));
        let quizzes = Arc::new(SqliteQuizRepository::new(pool.clone()));
        let scores = Arc::new(SqliteScoreRepository::new(pool));

        Self::from_services(
            AccountService::new(users),
            QuizSession::new(quizzes, scores.clone()),
            ResultsService::new(scores),
        )
    }

    pub fn from_services(
        accounts: AccountService,
        quiz_session: QuizSession,
        results: ResultsService,
    ) -> Self {
        Self {
            accounts,
            quiz_session,
            results,
            context: SessionContext::default(),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Runs the menu until Exit is chosen or input ends. Only terminal I/O
    /// failures are returned; storage faults are reported and the loop goes
    /// on.
    pub async fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<()> {
        loop {
            console.say(MENU)?;
            let Some(input) = console.prompt("Select an option: ")? else {
                tracing::debug!("Input closed; leaving menu");
                return Ok(());
            };

            match self.dispatch(&input, console).await? {
                Flow::Continue => continue,
                Flow::Exit => return Ok(()),
            }
        }
    }

    async fn dispatch<C: Console + ?Sized>(
        &mut self,
        input: &str,
        console: &mut C,
    ) -> Result<Flow> {
        let Some(choice) = MenuChoice::parse(input) else {
            console.say("Invalid option. Try again.")?;
            return Ok(Flow::Continue);
        };

        match choice {
            MenuChoice::Register => self.register(console).await?,
            MenuChoice::Login => self.login(console).await?,
            MenuChoice::TakeQuiz => match self.context.current_user {
                Some(user_id) => self.take_quiz(user_id, console).await?,
                None => console.say("Please log in first!")?,
            },
            MenuChoice::ShowResults => match self.context.current_user {
                Some(user_id) => self.show_results(user_id, console).await?,
                None => console.say("Please log in first!")?,
            },
            MenuChoice::Exit => {
                console.say("Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    async fn register<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<()> {
        let Some((email, password)) = read_credentials(console)? else {
            return Ok(());
        };

        match self
            .accounts
            .register(RegisterRequest { email, password })
            .await
        {
            Ok(_) => console.say("Registration successful!")?,
            Err(AccountServiceError::AlreadyRegistered) => {
                console.say("Email already registered!")?
            }
            Err(e) => report_fault(console, &e)?,
        }
        Ok(())
    }

    async fn login<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<()> {
        let Some((email, password)) = read_credentials(console)? else {
            return Ok(());
        };

        match self.accounts.login(LoginRequest { email, password }).await {
            Ok(user) => {
                self.context.current_user = Some(user.id);
                console.say("Login successful!")?;
            }
            Err(AccountServiceError::InvalidCredentials) => {
                // A failed attempt ends any earlier session
                self.context.current_user = None;
                console.say("Invalid email or password.")?;
            }
            Err(e) => report_fault(console, &e)?,
        }
        Ok(())
    }

    async fn take_quiz<C: Console + ?Sized>(
        &mut self,
        user_id: UserId,
        console: &mut C,
    ) -> Result<()> {
        match self.quiz_session.run(user_id, console).await {
            Ok(_) => Ok(()),
            Err(QuizSessionError::Io(e)) => Err(e.into()),
            Err(e) => report_fault(console, &e),
        }
    }

    async fn show_results<C: Console + ?Sized>(
        &mut self,
        user_id: UserId,
        console: &mut C,
    ) -> Result<()> {
        let results = match self.results.get_results(user_id).await {
            Ok(results) => results,
            Err(e) => return report_fault(console, &e),
        };

        if results.is_empty() {
            console.say("No quiz attempts found.")?;
            return Ok(());
        }

        console.say("")?;
        console.say("Your Quiz Results:")?;
        for result in &results {
            console.say(&format!("Quiz: {}, Score: {}", result.quiz_name, result.score))?;
        }
        Ok(())
    }
}

fn read_credentials<C: Console + ?Sized>(console: &mut C) -> Result<Option<(String, String)>> {
    let Some(email) = console.prompt("Enter your email: ")? else {
        return Ok(None);
    };
    let Some(password) = console.prompt_password("Enter your password: ")? else {
        return Ok(None);
    };
    Ok(Some((email, password)))
}

fn report_fault<C: Console + ?Sized>(
    console: &mut C,
    error: &dyn std::error::Error,
) -> Result<()> {
    tracing::warn!("Storage fault: {}", error);
    console.say(&format!("Something went wrong: {}", error))?;
    Ok(())
}
