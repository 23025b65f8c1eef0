pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod shell;
pub mod storage;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;
