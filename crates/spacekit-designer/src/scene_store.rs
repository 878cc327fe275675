//! Scene store: the live entity collection and the current selection.
//!
//! All scene mutations go through here. Mutations that represent a finished
//! user action commit a snapshot to the history; `move_entity` does not, so a
//! drag gesture can update positions live and commit once at the end.

use crate::catalog::footprint_contains;
use crate::grid::Grid;
use crate::history::{HistoryManager, Snapshot};
use crate::model::{ComponentType, Entity, Point};
use spacekit_core::constants::{DEFAULT_GRID_SIZE, DEFAULT_HISTORY_LIMIT};
use spacekit_core::{AppEvent, ChangeKind, EventBus, SceneEvent, SelectionEvent};
use std::sync::Arc;
use uuid::Uuid;

/// Live scene plus its undo history.
#[derive(Debug)]
pub struct SceneStore {
    entities: Vec<Entity>,
    selected: Option<String>,
    history: HistoryManager,
    grid: Grid,
    events: Arc<EventBus>,
    revision: u64,
}

impl SceneStore {
    /// Creates an empty scene publishing on `events`.
    pub fn new(grid_size: f64, history_limit: usize, events: Arc<EventBus>) -> Self {
        Self {
            entities: Vec::new(),
            selected: None,
            history: HistoryManager::new(history_limit),
            grid: Grid::new(grid_size),
            events,
            revision: 0,
        }
    }

    /// Places a new entity of `kind` at the grid point nearest `(x, y)`.
    ///
    /// The new entity becomes the selection and the change is committed.
    pub fn add_entity(&mut self, kind: ComponentType, x: f64, y: f64) -> Entity {
        let position = self.grid.snap(Point::new(x, y));
        let entity = Entity::new(self.fresh_id(kind), kind, position.x, position.y);
        tracing::debug!(
            "Adding {} at ({}, {})",
            entity.id(),
            position.x,
            position.y
        );

        self.entities.push(entity.clone());
        self.selected = Some(entity.id().to_string());
        self.commit();
        self.notify_selection();
        entity
    }

    /// Changes the selection. Never commits.
    ///
    /// An id that names no entity clears the selection.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id
            .filter(|id| self.entity(id).is_some())
            .map(str::to_string);
        if id.is_some() && self.selected.is_none() {
            tracing::debug!("Select ignored unknown id {:?}", id);
        }
        self.notify_selection();
    }

    /// Removes the selected entity and commits. Returns the removed entity.
    pub fn delete_selected(&mut self) -> Option<Entity> {
        let index = self.selected_index()?;
        let removed = self.entities.remove(index);
        tracing::debug!("Deleted {}", removed.id());
        self.selected = None;
        self.commit();
        self.notify_selection();
        Some(removed)
    }

    /// Adds `delta` radians to the selected entity's rotation and commits.
    ///
    /// Returns false when nothing is selected or `delta` is not finite.
    pub fn rotate_selected(&mut self, delta: f64) -> bool {
        if !delta.is_finite() {
            tracing::warn!("Ignoring non-finite rotation {}", delta);
            return false;
        }
        let Some(index) = self.selected_index() else {
            tracing::debug!("Rotate with nothing selected");
            return false;
        };
        self.entities[index].rotate_by(delta);
        self.commit();
        self.notify_selection();
        true
    }

    /// Multiplies the selected entity's scale by `factor`, clamped to the
    /// allowed range, and commits.
    ///
    /// Returns false when nothing is selected or `factor` is not a positive
    /// finite number.
    pub fn scale_selected(&mut self, factor: f64) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            tracing::warn!("Ignoring invalid scale factor {}", factor);
            return false;
        }
        let Some(index) = self.selected_index() else {
            tracing::debug!("Scale with nothing selected");
            return false;
        };
        self.entities[index].scale_by(factor);
        self.commit();
        self.notify_selection();
        true
    }

    /// Moves an entity to the grid point nearest `(x, y)` without committing.
    ///
    /// Returns false when `id` names no entity.
    pub fn move_entity(&mut self, id: &str, x: f64, y: f64) -> bool {
        let position = self.grid.snap(Point::new(x, y));
        match self.entities.iter_mut().find(|e| e.id() == id) {
            Some(entity) => {
                entity.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Records the live scene as a new history snapshot.
    pub fn commit(&mut self) {
        self.history.commit(&self.entities);
        self.changed(ChangeKind::Commit);
    }

    /// Restores the previous snapshot. Returns false at the oldest state.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                tracing::debug!("Undo to snapshot {}", self.history.index());
                self.restore(&snapshot, ChangeKind::Undo);
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot. Returns false at the newest state.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                tracing::debug!("Redo to snapshot {}", self.history.index());
                self.restore(&snapshot, ChangeKind::Redo);
                true
            }
            None => false,
        }
    }

    /// Replaces the scene and starts a fresh history at that state.
    pub(crate) fn replace_all(&mut self, entities: Vec<Entity>, kind: ChangeKind) {
        self.entities = entities;
        self.history.reset(&self.entities);
        self.selected = None;
        self.changed(kind);
        self.notify_selection();
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn selected(&self) -> Option<&Entity> {
        self.selected.as_deref().and_then(|id| self.entity(id))
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn grid_size(&self) -> f64 {
        self.grid.size()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Snapshot at the current history position.
    ///
    /// During a drag this lags the live scene until the drag commits.
    pub fn committed(&self) -> Snapshot {
        self.history.current()
    }

    /// Counter bumped by every commit, undo, redo, load, and clear.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Topmost entity whose footprint contains the world point.
    pub fn entity_at(&self, point: Point) -> Option<&Entity> {
        self.entities
            .iter()
            .rev()
            .find(|e| footprint_contains(e, point))
    }

    /// Publishes the selected entity's current fields.
    pub(crate) fn notify_selection(&self) {
        let selected = self.selected().map(Entity::to_selected);
        self.events
            .notify(AppEvent::Selection(SelectionEvent::Changed(selected)));
    }

    fn restore(&mut self, snapshot: &Snapshot, kind: ChangeKind) {
        self.entities = snapshot.to_vec();
        self.selected = None;
        self.changed(kind);
        self.notify_selection();
    }

    fn changed(&mut self, kind: ChangeKind) {
        self.revision += 1;
        self.events.notify(AppEvent::Scene(SceneEvent::Changed {
            kind,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            entity_count: self.entities.len(),
        }));
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected.as_deref()?;
        self.entities.iter().position(|e| e.id() == id)
    }

    fn fresh_id(&self, kind: ComponentType) -> String {
        loop {
            let id = format!("{}_{}", kind, Uuid::new_v4().simple());
            if self.entity(&id).is_none() {
                return id;
            }
        }
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new(
            DEFAULT_GRID_SIZE,
            DEFAULT_HISTORY_LIMIT,
            Arc::new(EventBus::new()),
        )
    }
}
