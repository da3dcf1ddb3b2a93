//! Command implementations.
//!
//! - [`generate`] - Print the bundler targets
//! - [`check`] - Validate the project layout

pub mod check;
pub mod generate;

pub use check::execute as check_execute;
pub use generate::execute as generate_execute;
