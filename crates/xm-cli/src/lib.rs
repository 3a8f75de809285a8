//! Library surface of the xcodemod CLI: exit codes, logging setup, and
//! report rendering, shared between the binary and its tests.

pub mod exit_codes;
pub mod logging;
pub mod report;
