//! Small shared utilities.

pub mod password;
