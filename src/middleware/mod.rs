//! Request middleware: authenticated-identity extraction and permission guards.

pub mod auth;
