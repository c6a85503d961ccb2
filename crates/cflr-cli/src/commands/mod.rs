//! CLI command implementations

pub mod sso;
