//! Scene object model: points, furnishing types, and placed entities.

use serde::{Deserialize, Serialize};
use spacekit_core::constants::{MAX_ENTITY_SCALE, MIN_ENTITY_SCALE};
use spacekit_core::SelectedEntity;
use std::fmt;
use std::str::FromStr;

/// A 2D point in world or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Closed set of furnishing types that can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Chair,
    Table,
    Sofa,
    Bed,
    Wall,
    Door,
    Window,
    Plant,
    Lamp,
    Bookshelf,
}

impl ComponentType {
    /// Every type, in palette order.
    pub const ALL: [ComponentType; 10] = [
        ComponentType::Chair,
        ComponentType::Table,
        ComponentType::Sofa,
        ComponentType::Bed,
        ComponentType::Bookshelf,
        ComponentType::Wall,
        ComponentType::Door,
        ComponentType::Window,
        ComponentType::Plant,
        ComponentType::Lamp,
    ];

    /// Lowercase name used in layout files and id prefixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Chair => "chair",
            ComponentType::Table => "table",
            ComponentType::Sofa => "sofa",
            ComponentType::Bed => "bed",
            ComponentType::Wall => "wall",
            ComponentType::Door => "door",
            ComponentType::Window => "window",
            ComponentType::Plant => "plant",
            ComponentType::Lamp => "lamp",
            ComponentType::Bookshelf => "bookshelf",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known furnishing type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component type '{0}'")]
pub struct UnknownComponentType(pub String);

impl FromStr for ComponentType {
    type Err = UnknownComponentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ComponentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| UnknownComponentType(s.to_string()))
    }
}

/// One placed furnishing object.
///
/// `id` and `kind` are fixed at construction. Position, rotation, and scale
/// change only through the scene store, which keeps positions on the grid and
/// scale inside `[MIN_ENTITY_SCALE, MAX_ENTITY_SCALE]`.
///
/// Equality is field-wise, which is what snapshot comparison needs; use
/// [`Entity::same_id`] to ask whether two values describe the same object.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: String,
    kind: ComponentType,
    x: f64,
    y: f64,
    rotation: f64,
    scale: f64,
}

impl Entity {
    /// Creates an unrotated, unscaled entity at `(x, y)`.
    pub fn new(id: impl Into<String>, kind: ComponentType, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            x,
            y,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Sets the rotation in radians.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the scale, clamped to the allowed range.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = clamp_scale(scale);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ComponentType {
        self.kind
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rotation in radians. Accumulates without wrapping.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// True when both values refer to the same scene object.
    pub fn same_id(&self, other: &Entity) -> bool {
        self.id == other.id
    }

    /// True when position, rotation, or scale differ.
    pub fn transform_differs(&self, other: &Entity) -> bool {
        self.x != other.x
            || self.y != other.y
            || self.rotation != other.rotation
            || self.scale != other.scale
    }

    /// Field values for selection notifications.
    pub fn to_selected(&self) -> SelectedEntity {
        SelectedEntity {
            id: self.id.clone(),
            kind: self.kind.as_str().to_string(),
            x: self.x,
            y: self.y,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    pub(crate) fn rotate_by(&mut self, delta: f64) {
        self.rotation += delta;
    }

    pub(crate) fn scale_by(&mut self, factor: f64) {
        self.scale = clamp_scale(self.scale * factor);
    }
}

/// Clamps a scale factor into `[MIN_ENTITY_SCALE, MAX_ENTITY_SCALE]`.
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_ENTITY_SCALE, MAX_ENTITY_SCALE)
}
