//! cflr CLI
//!
//! Command handlers, interactive prompt and output rendering for the `cflr`
//! binary. Handlers are generic over [`cflr_core::SsoApi`], [`prompt::Picker`]
//! and the output writer.

pub mod commands;
pub mod output;
pub mod prompt;
