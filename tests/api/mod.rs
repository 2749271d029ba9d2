//! REST API endpoint tests.

mod entry_tests;
mod health_tests;
mod user_tests;
