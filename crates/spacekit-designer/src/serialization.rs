//! Layout serialization.
//!
//! A layout is a JSON array of entity records, each
//! `{ "id", "type", "x", "y", "rotation", "scale" }`, in z-order. There is no
//! version field. Loading validates every record before touching the scene,
//! so a rejected layout leaves the editor exactly as it was.

use crate::grid::Grid;
use crate::model::{ComponentType, Entity};
use crate::scene_store::SceneStore;
use serde::{Deserialize, Serialize};
use spacekit_core::constants::{MAX_ENTITY_SCALE, MIN_ENTITY_SCALE};
use spacekit_core::{AppEvent, ChangeKind, FileEvent, LayoutError, Result};
use std::collections::HashSet;
use std::path::Path;

/// One entity as stored in a layout file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl From<&Entity> for EntityRecord {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id().to_string(),
            kind: entity.kind().as_str().to_string(),
            x: entity.x(),
            y: entity.y(),
            rotation: entity.rotation(),
            scale: entity.scale(),
        }
    }
}

impl EntityRecord {
    fn into_entity(self, index: usize, grid: &Grid) -> std::result::Result<Entity, LayoutError> {
        let invalid = |reason: String| LayoutError::InvalidRecord { index, reason };

        if self.id.trim().is_empty() {
            return Err(invalid("empty id".to_string()));
        }
        let kind: ComponentType = self.kind.parse().map_err(|e| invalid(format!("{e}")))?;
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("rotation", self.rotation),
            ("scale", self.scale),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{field} is not a finite number")));
            }
        }
        if !(MIN_ENTITY_SCALE..=MAX_ENTITY_SCALE).contains(&self.scale) {
            return Err(invalid(format!(
                "scale {} outside [{}, {}]",
                self.scale, MIN_ENTITY_SCALE, MAX_ENTITY_SCALE
            )));
        }

        Ok(Entity::new(self.id, kind, grid.snap_value(self.x), grid.snap_value(self.y))
            .with_rotation(self.rotation)
            .with_scale(self.scale))
    }
}

/// Renders entities as layout JSON.
pub fn layout_to_json(entities: &[Entity]) -> Result<String> {
    let records: Vec<EntityRecord> = entities.iter().map(EntityRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Parses and validates layout JSON.
///
/// Positions are snapped to `grid`. Fails on malformed JSON, unknown or
/// missing fields, unknown types, non-finite numbers, out-of-range scale,
/// and empty or duplicate ids.
pub fn layout_from_json(text: &str, grid: &Grid) -> Result<Vec<Entity>> {
    let records: Vec<EntityRecord> =
        serde_json::from_str(text).map_err(|e| LayoutError::Malformed {
            reason: e.to_string(),
        })?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut entities = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if !seen.insert(record.id.clone()) {
            return Err(LayoutError::DuplicateId { id: record.id }.into());
        }
        entities.push(record.into_entity(index, grid)?);
    }
    Ok(entities)
}

impl SceneStore {
    /// Serializes the snapshot at the current history position.
    ///
    /// An in-progress drag is not included until it commits.
    pub fn serialize(&self) -> Result<String> {
        layout_to_json(&self.committed())
    }

    /// Replaces the scene with the layout in `text`.
    ///
    /// On success the selection is cleared and the history restarts at the
    /// loaded state. On failure nothing changes, a `LoadFailed` event is
    /// published, and the error is returned.
    pub fn deserialize(&mut self, text: &str) -> Result<()> {
        self.load_layout(text, None)
    }

    pub(crate) fn load_layout(&mut self, text: &str, source: Option<&Path>) -> Result<()> {
        match layout_from_json(text, &self.grid()) {
            Ok(entities) => {
                let entity_count = entities.len();
                tracing::info!("Loaded layout with {} entities", entity_count);
                self.replace_all(entities, ChangeKind::Load);
                self.events().notify(AppEvent::File(FileEvent::Loaded {
                    path: source.map(Path::to_path_buf),
                    entity_count,
                }));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected layout: {}", e);
                self.events().notify(AppEvent::File(FileEvent::LoadFailed {
                    reason: e.to_string(),
                }));
                Err(e)
            }
        }
    }

    /// Empties the scene and restarts the history with one empty snapshot.
    pub fn clear(&mut self) {
        tracing::info!("Clearing scene ({} entities)", self.len());
        self.replace_all(Vec::new(), ChangeKind::Clear);
        self.events().notify(AppEvent::File(FileEvent::Cleared));
    }
}
