//! Common type tests.

/// Access width tests.
pub mod data;


/// Program counter tests.
pub mod pc;

/// Register file tests.
pub mod reg;
