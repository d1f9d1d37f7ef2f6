// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static furniture catalog

use crate::error::{Error, Result};
use crate::furniture::FurnitureItem;

/// Shade given to freshly placed items
pub const DEFAULT_SHADE: f64 = 0.15;

/// Catalog entry for one furniture kind
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FurnitureDef {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: &'static str,
    pub label: &'static str,
    /// Unscaled footprint width (plan units)
    pub width: f64,
    /// Unscaled footprint depth (plan units)
    pub depth: f64,
    /// Base color as a CSS hex string
    pub color: &'static str,
}

/// Every furniture kind that can be placed
pub static FURNITURE_CATALOG: [FurnitureDef; 5] = [
    FurnitureDef {
        kind: "chair",
        label: "Chair",
        width: 60.0,
        depth: 60.0,
        color: "#c9a27e",
    },
    FurnitureDef {
        kind: "table",
        label: "Table",
        width: 120.0,
        depth: 80.0,
        color: "#b08d57",
    },
    FurnitureDef {
        kind: "bed",
        label: "Bed",
        width: 180.0,
        depth: 130.0,
        color: "#d7d7d7",
    },
    FurnitureDef {
        kind: "sofa",
        label: "Sofa",
        width: 180.0,
        depth: 80.0,
        color: "#9bb3c7",
    },
    FurnitureDef {
        kind: "wardrobe",
        label: "Wardrobe",
        width: 140.0,
        depth: 60.0,
        color: "#c2b59b",
    },
];

/// Look up a catalog entry by kind
#[inline]
pub fn catalog_entry(kind: &str) -> Option<&'static FurnitureDef> {
    FURNITURE_CATALOG.iter().find(|def| def.kind == kind)
}

/// Create a new item of `kind` with its top-left corner at `(x, y)`
///
/// The item gets a fresh id, the catalog footprint and color, no rotation,
/// unit scale and the default shade.
pub fn make_item(kind: &str, x: f64, y: f64) -> Result<FurnitureItem> {
    let def = catalog_entry(kind).ok_or_else(|| Error::UnknownFurnitureType(kind.to_string()))?;

    let mut item = FurnitureItem::new(new_item_id(), x, y, def.width, def.depth);
    item.kind = def.kind.to_string();
    item.color = def.color.to_string();
    item.shade = DEFAULT_SHADE;
    Ok(item)
}

fn new_item_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
