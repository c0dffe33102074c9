//! The request/response collaborator used by the client
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::Result;
use serde_json::Value;

/// Sends requests to the Metadata Editor service.
///
/// Paths are relative to the configured API URL, e.g. `/editor/12`.
/// Implementations report a 404 as [`crate::Error::NotFound`], a 403 as
/// [`crate::Error::PermissionDenied`], any other failure as
/// [`crate::Error::Request`] and a body that is not JSON as
/// [`crate::Error::InvalidResponse`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// GET `path` and return the decoded JSON body
    async fn get(&self, path: &str) -> Result<Value>;

    /// POST `body` as JSON to `path` and return the decoded JSON body
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;
}

impl<T: Transport> Transport for &T {
    async fn get(&self, path: &str) -> Result<Value> {
        (**self).get(path).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        (**self).post(path, body).await
    }
}
