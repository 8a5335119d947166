//! Interactive tutor for one-variable linear equations.

pub mod catalogue;
pub mod config;
pub mod repl;
pub mod report;
