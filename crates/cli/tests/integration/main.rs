//! CLI integration tests.

mod common;
mod quick_tests;
mod template_tests;
mod wizard_tests;
