//! Component catalog.
//!
//! Static metadata for each furnishing type: palette name, category,
//! description, footprint size in world units, and fill colour. Renderers use
//! the footprint and colour to draw proxies; the scene store uses the
//! footprint for hit-testing.

use crate::model::{ComponentType, Entity, Point};
use serde::Serialize;
use std::fmt;

/// Palette grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Furniture,
    Structural,
    Decorative,
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentCategory::Furniture => write!(f, "furniture"),
            ComponentCategory::Structural => write!(f, "structural"),
            ComponentCategory::Decorative => write!(f, "decorative"),
        }
    }
}

/// Catalog entry for one furnishing type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentInfo {
    pub kind: ComponentType,
    pub name: &'static str,
    pub category: ComponentCategory,
    pub description: &'static str,
    /// Unscaled footprint width in world units.
    pub width: f64,
    /// Unscaled footprint height in world units.
    pub height: f64,
    /// Fill colour as 0xRRGGBB.
    pub color: u32,
}

const fn info(
    kind: ComponentType,
    name: &'static str,
    category: ComponentCategory,
    description: &'static str,
    width: f64,
    height: f64,
    color: u32,
) -> ComponentInfo {
    ComponentInfo {
        kind,
        name,
        category,
        description,
        width,
        height,
        color,
    }
}

static CATALOG: [ComponentInfo; 10] = [
    info(
        ComponentType::Chair,
        "Chair",
        ComponentCategory::Furniture,
        "Comfortable seating",
        64.0,
        64.0,
        0x8B4513,
    ),
    info(
        ComponentType::Table,
        "Table",
        ComponentCategory::Furniture,
        "Dining or work surface",
        96.0,
        64.0,
        0xD2691E,
    ),
    info(
        ComponentType::Sofa,
        "Sofa",
        ComponentCategory::Furniture,
        "Living room seating",
        128.0,
        64.0,
        0x4169E1,
    ),
    info(
        ComponentType::Bed,
        "Bed",
        ComponentCategory::Furniture,
        "Bedroom furniture",
        128.0,
        96.0,
        0x9370DB,
    ),
    info(
        ComponentType::Bookshelf,
        "Bookshelf",
        ComponentCategory::Furniture,
        "Storage for books",
        64.0,
        128.0,
        0x8B4513,
    ),
    info(
        ComponentType::Wall,
        "Wall",
        ComponentCategory::Structural,
        "Room divider",
        32.0,
        128.0,
        0x696969,
    ),
    info(
        ComponentType::Door,
        "Door",
        ComponentCategory::Structural,
        "Room entrance",
        32.0,
        96.0,
        0xA0522D,
    ),
    info(
        ComponentType::Window,
        "Window",
        ComponentCategory::Structural,
        "Natural light source",
        64.0,
        32.0,
        0x87CEEB,
    ),
    info(
        ComponentType::Plant,
        "Plant",
        ComponentCategory::Decorative,
        "Green decoration",
        48.0,
        64.0,
        0x228B22,
    ),
    info(
        ComponentType::Lamp,
        "Lamp",
        ComponentCategory::Decorative,
        "Lighting fixture",
        32.0,
        96.0,
        0xFFD700,
    ),
];

/// All catalog entries in palette order.
pub fn catalog() -> &'static [ComponentInfo] {
    &CATALOG
}

/// Metadata for one type.
pub fn component_info(kind: ComponentType) -> &'static ComponentInfo {
    // CATALOG holds one entry per variant, in ComponentType::ALL order
    let index = ComponentType::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default();
    &CATALOG[index]
}

/// Catalog entries belonging to `category`, in palette order.
pub fn components_in(category: ComponentCategory) -> impl Iterator<Item = &'static ComponentInfo> {
    CATALOG.iter().filter(move |c| c.category == category)
}

/// True when `point` lies inside the entity's rotated, scaled footprint.
///
/// Footprints are centred on the entity position.
pub fn footprint_contains(entity: &Entity, point: Point) -> bool {
    let info = component_info(entity.kind());
    let d = point - entity.position();
    let (sin, cos) = (-entity.rotation()).sin_cos();
    let local_x = (d.x * cos - d.y * sin) / entity.scale();
    let local_y = (d.x * sin + d.y * cos) / entity.scale();
    local_x.abs() <= info.width / 2.0 && local_y.abs() <= info.height / 2.0
}
