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

//! Errors produced by the rename pipeline.

use http::StatusCode;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for the rename pipeline.
///
/// Each variant maps to one user-visible response, see [response]. The
/// validation variants are produced before any Drive call is attempted.
///
/// [response]: Error::response
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request body was absent, empty, or not valid JSON.
    #[error("cannot parse the request body as JSON")]
    MalformedJson,

    /// The request body has no top-level `logData` field.
    #[error("the request body has no `logData` field")]
    MissingLogData,

    /// An element of `logData` does not match the expected record shape.
    #[error("{0}")]
    InvalidRecord(#[source] BoxError),

    /// A Drive rename call failed. The batch stops at the first such
    /// failure, remaining records are not attempted.
    #[error("{0}")]
    RemoteCall(#[source] crate::drive::Error),

    /// Creating the Drive client (including credential resolution) failed.
    /// This is not part of the request contract, the server returns a
    /// generic error response for it.
    #[error(transparent)]
    ClientSetup(#[from] crate::drive::BuildError),
}

impl Error {
    pub(crate) fn invalid_record<T: Into<BoxError>>(source: T) -> Self {
        Error::InvalidRecord(source.into())
    }

    /// The user-visible response for this error.
    pub fn response(&self) -> (StatusCode, String) {
        match self {
            Error::MalformedJson => (
                StatusCode::BAD_REQUEST,
                "Malformed request. Could not retrieve JSON.\n".to_string(),
            ),
            Error::MissingLogData => (
                StatusCode::BAD_REQUEST,
                "Malformed request. Missing required param.\n".to_string(),
            ),
            Error::InvalidRecord(e) => (
                StatusCode::BAD_REQUEST,
                format!("Malformed request. Invalid data: {e}\n"),
            ),
            Error::RemoteCall(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to rename file: {e}\n"),
            ),
            Error::ClientSetup(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}\n")),
        }
    }
}
