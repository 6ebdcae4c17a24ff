// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A minimal client for the Drive API `files` resource.
//!
//! This service only needs the `files.update` method, and only to change a
//! file's display name, so the client exposes exactly that.

use google_cloud_auth::credentials::{CacheableResource, Credentials};
use http::Extensions;

/// A `Result` alias where the `Err` case is [Error].
pub type Result<T> = std::result::Result<T, Error>;

/// The OAuth2 scope used when resolving default credentials.
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";

/// The default endpoint for the Drive API.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com";

/// The set of characters that are percent encoded in path segments.
const PATH_ENCODE_SET: &percent_encoding::AsciiSet = &percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Implements a client for the Drive API `files` resource, pinned to the v3
/// interface.
///
/// # Configuration
///
/// Use the `with_*` methods on [builder()][Files::builder] to override the
/// endpoint or the credentials. By default the client targets the global
/// endpoint and authenticates with [Application Default Credentials] scoped
/// to [DRIVE_SCOPE].
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct Files {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
}

impl Files {
    /// Returns a builder for [Files].
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Renames one file via the Drive v3 `files.update` method.
    ///
    /// Sends `PATCH /drive/v3/files/{file_id}` with body `{"name": ...}`.
    /// Any failure is reported through the returned [Error]; there are no
    /// retries.
    pub async fn update_name(&self, file_id: &str, new_name: &str) -> Result<File> {
        let id = percent_encoding::utf8_percent_encode(file_id, PATH_ENCODE_SET);
        let builder = self
            .inner
            .patch(format!("{}/drive/v3/files/{id}", self.endpoint))
            .json(&serde_json::json!({ "name": new_name }));
        let builder = self.apply_auth_headers(builder).await?;
        let response = builder.send().await.map_err(Error::Transport)?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let payload = response.text().await.map_err(Error::Transport)?;
            return Err(Error::Service { status, payload });
        }
        response.json::<File>().await.map_err(Error::Deserialization)
    }

    async fn apply_auth_headers(
        &self,
        mut builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        let cached_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::Authentication)?;
        let headers = match cached_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("headers are not cached");
            }
        };
        for (key, value) in headers.iter() {
            builder = builder.header(key, value);
        }
        Ok(builder)
    }
}

/// A builder for [Files].
#[derive(Debug, Default)]
pub struct Builder {
    endpoint: Option<String>,
    credentials: Option<Credentials>,
}

impl Builder {
    /// Sets the endpoint, e.g. a test server address.
    pub fn with_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the credentials, overriding the default credential lookup.
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.credentials = Some(v.into());
        self
    }

    /// Creates the client. When no credentials were injected this resolves
    /// Application Default Credentials scoped to [DRIVE_SCOPE].
    pub async fn build(self) -> std::result::Result<Files, BuildError> {
        let cred = match self.credentials {
            Some(c) => c,
            None => google_cloud_auth::credentials::Builder::default()
                .with_scopes([DRIVE_SCOPE])
                .build()?,
        };
        Ok(Files {
            inner: reqwest::Client::new(),
            cred,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

/// The error type for [Files] construction.
#[derive(thiserror::Error, Debug)]
#[error("cannot create the Drive client: {0}")]
pub struct BuildError(#[from] google_cloud_auth::build_errors::Error);

/// The error type for Drive requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Could not obtain auth headers from the credentials provider.
    #[error("cannot create auth headers: {0}")]
    Authentication(#[source] google_cloud_auth::errors::CredentialsError),

    /// The request never produced a response, or the response body could
    /// not be read.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service returned a non-success HTTP status.
    #[error("the service returned HTTP status {status}: {payload}")]
    Service { status: u16, payload: String },

    /// The response body is not a valid `File` resource.
    #[error("cannot deserialize the response: {0}")]
    Deserialization(#[source] reqwest::Error),
}

/// A subset of the Drive v3 `File` resource, enough to confirm a rename.
///
/// The service only relies on the success signal; the fields are parsed for
/// logging and tests.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub mime_type: String,
}
