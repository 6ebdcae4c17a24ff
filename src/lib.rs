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

//! Renames Google Drive logfiles in bulk.
//!
//! This service accepts an HTTP request whose JSON body lists the files to
//! rename:
//!
//! ```json
//! { "logData": [ { "fileId": "<id>", "newName": "<name>" }, ... ] }
//! ```
//!
//! The request is fully validated before any Drive call is issued. Renames
//! are then applied strictly in array order, one `files.update` call per
//! record, stopping at the first failure. The response is a plain text body
//! paired with a 200, 400, or 500 status code.

pub mod drive;
pub mod error;
pub mod handler;
pub mod model;
