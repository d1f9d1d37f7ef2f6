// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene configuration, optionally overridden from environment variables.

use crate::error::{Error, Result};
use crate::walls::FRONT_EPSILON;

/// Settings for turning plan geometry into a 3D scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Plan units per world unit (100 converts centimetres to metres).
    pub unit_scale: f64,
    /// Wall height in world units.
    pub wall_height: f64,
    /// Wall thickness in world units.
    pub wall_thickness: f64,
    /// Floor slab thickness in world units.
    pub floor_thickness: f64,
    /// Front-wall tolerance in plan units.
    pub front_epsilon: f64,
}

impl SceneConfig {
    /// Defaults, with any of `ROOMPLAN_UNIT_SCALE`, `ROOMPLAN_WALL_HEIGHT`,
    /// `ROOMPLAN_WALL_THICKNESS`, `ROOMPLAN_FLOOR_THICKNESS` and
    /// `ROOMPLAN_FRONT_EPSILON` applied on top. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            unit_scale: env_f64("ROOMPLAN_UNIT_SCALE").unwrap_or(defaults.unit_scale),
            wall_height: env_f64("ROOMPLAN_WALL_HEIGHT").unwrap_or(defaults.wall_height),
            wall_thickness: env_f64("ROOMPLAN_WALL_THICKNESS").unwrap_or(defaults.wall_thickness),
            floor_thickness: env_f64("ROOMPLAN_FLOOR_THICKNESS")
                .unwrap_or(defaults.floor_thickness),
            front_epsilon: env_f64("ROOMPLAN_FRONT_EPSILON").unwrap_or(defaults.front_epsilon),
        }
    }

    /// Check that every length is positive and finite.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("unit_scale", self.unit_scale),
            ("wall_height", self.wall_height),
            ("wall_thickness", self.wall_thickness),
            ("floor_thickness", self.floor_thickness),
            ("front_epsilon", self.front_epsilon),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            unit_scale: 100.0,
            wall_height: 2.4,
            wall_thickness: 0.08,
            floor_thickness: 0.02,
            front_epsilon: FRONT_EPSILON,
        }
    }
}

fn env_f64(key: &str) -> Option<f64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable scene setting");
            None
        }
    }
}
