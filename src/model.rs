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

//! The request body types for the rename endpoint.

use crate::error::Error;

/// One requested rename, a (file identifier, new display name) pair.
///
/// The wire format requires exactly the `fileId` and `newName` fields.
/// Unknown or missing fields reject the whole request.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RenameRecord {
    /// Opaque identifier of the Drive file to rename. Must not be empty.
    pub file_id: String,
    /// Replacement display name. Drive permits an empty name, so we do too.
    pub new_name: String,
}

/// Parses and validates a request body into rename records.
///
/// Validation is all-or-nothing: every record must deserialize cleanly and
/// carry a non-empty `fileId` before the caller issues any remote call.
pub fn parse_request(body: &[u8]) -> Result<Vec<RenameRecord>, Error> {
    let json: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| Error::MalformedJson)?;
    let log_data = json.get("logData").ok_or(Error::MissingLogData)?.clone();
    let records: Vec<RenameRecord> =
        serde_json::from_value(log_data).map_err(Error::invalid_record)?;
    if records.iter().any(|r| r.file_id.is_empty()) {
        return Err(Error::invalid_record("`fileId` must not be empty"));
    }
    Ok(records)
}
