// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for coverage planning.

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning a coverage path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An input parameter is outside its valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
