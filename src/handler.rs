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

//! The HTTP entry point: validates a rename batch and applies it to Drive.

use axum::body::Bytes;
use axum::extract::State;
use http::StatusCode;
use std::sync::Arc;

use crate::drive;
use crate::error::Error;
use crate::model;

/// Dependencies injected into each request.
///
/// `credentials: None` means Application Default Credentials, resolved when
/// the Drive client is built. Tests substitute a fake endpoint and fake
/// credentials here.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub endpoint: Option<String>,
    pub credentials: Option<google_cloud_auth::credentials::Credentials>,
}

/// Creates the service router.
///
/// This is the equivalent of the functions-framework trigger wiring: the
/// hosting runtime decides method and path, the handler only defines the
/// body contract.
pub fn router(config: Config) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::post(rename_logfiles))
        .with_state(Arc::new(config))
}

/// Renames the Drive files named in the request body.
///
/// The response is one of five literal texts paired with a 200, 400, or 500
/// status code.
async fn rename_logfiles(
    State(config): State<Arc<Config>>,
    body: Bytes,
) -> (StatusCode, String) {
    match run(&config, &body).await {
        Ok(count) => {
            tracing::info!(count, "logfile rename complete");
            (StatusCode::OK, "Logfile rename complete.\n".to_string())
        }
        Err(e) => {
            tracing::error!(error = ?e, "logfile rename failed");
            e.response()
        }
    }
}

async fn run(config: &Config, body: &[u8]) -> Result<usize, Error> {
    let records = model::parse_request(body)?;

    let mut builder = drive::Files::builder();
    if let Some(endpoint) = config.endpoint.clone() {
        builder = builder.with_endpoint(endpoint);
    }
    if let Some(credentials) = config.credentials.clone() {
        builder = builder.with_credentials(credentials);
    }
    let client = builder.build().await?;

    // The first failure aborts the batch, remaining records are not
    // attempted.
    for record in &records {
        let file = client
            .update_name(&record.file_id, &record.new_name)
            .await
            .map_err(Error::RemoteCall)?;
        tracing::info!(file_id = %record.file_id, name = %file.name, "renamed logfile");
    }
    Ok(records.len())
}
