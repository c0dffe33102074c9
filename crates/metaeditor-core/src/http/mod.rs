//! HTTP layer for the Metadata Editor API
//!
//! This module provides:
//! - [`HttpTransport`], the reqwest implementation of [`crate::Transport`]
//! - [`HttpError`], the normalized form of a failed response
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

pub mod client;
pub mod error;

pub use client::{HttpTransport, API_KEY_HEADER};
pub use error::HttpError;
