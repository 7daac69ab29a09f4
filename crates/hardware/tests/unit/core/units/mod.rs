//! Execution unit tests.


/// Branch executor tests.
pub mod bru;
