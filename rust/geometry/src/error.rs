// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building room meshes
///
/// Outline generation, wall extraction and pose transforms never fail; only
/// the mesh-building layer reports errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Triangulation failed: {0}")]
    TriangulationError(String),

    #[error("Invalid extrusion parameters: {0}")]
    InvalidExtrusion(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Data model error: {0}")]
    CoreError(#[from] roomplan_core::Error),
}
