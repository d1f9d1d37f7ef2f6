// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for data model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building room and furniture records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown furniture type: {0}")]
    UnknownFurnitureType(String),

    #[error("Invalid dimensions: {width} x {height}")]
    InvalidDimensions { width: f64, height: f64 },
}
