//! cflr Core Library
//!
//! This crate provides the core functionality for cflr:
//! - Settings and credential loading
//! - The SSO connector model and status filtering
//! - An authenticated client for the Cloudflare v4 API
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Credentials │────▶│  ApiClient  │────▶│   Filter    │────▶│ PATCH status│
//! │    (env)    │     │    (GET)    │     │ by status   │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use cflr_core::{ApiClient, ConnectorStatus, Credentials, Settings, SsoApi, filter_by_status};
//!
//! let credentials = Credentials::from_env()?;
//! let client = ApiClient::new(&Settings::default(), credentials)?;
//! let connectors = client.list_connectors("account-id").await?;
//! let enabled = filter_by_status(&connectors, &ConnectorStatus::Enabled);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod connectors;
pub mod error;

pub use client::{ApiClient, SsoApi};
pub use config::{Credentials, Settings};
pub use connectors::{ApiEnvelope, Connector, ConnectorStatus, filter_by_status};
pub use error::{Error, Result};
