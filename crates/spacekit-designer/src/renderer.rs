//! Renderer abstraction.
//!
//! A rendering surface keeps one visual proxy per entity. The scene engine
//! never touches renderer types; instead [`ProxySync`] diffs the scene against
//! what it last pushed and issues the minimal create/destroy/update/highlight
//! calls through [`SceneRenderer`].

use crate::model::Entity;
use std::collections::HashMap;

/// Operations a rendering surface must support.
pub trait SceneRenderer {
    /// Creates the visual for a newly visible entity.
    fn create_proxy(&mut self, entity: &Entity);

    /// Removes the visual for an entity that left the scene.
    fn destroy_proxy(&mut self, id: &str);

    /// Moves, rotates, or rescales an existing visual.
    fn update_proxy(&mut self, entity: &Entity);

    /// Turns the selection tint on or off.
    fn set_highlight(&mut self, id: &str, highlighted: bool);
}

/// Tracks what a renderer currently shows.
#[derive(Debug, Clone, Default)]
pub struct ProxySync {
    shown: HashMap<String, Entity>,
    highlighted: Option<String>,
}

impl ProxySync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings `renderer` in line with `entities` and `selected`.
    pub fn sync(
        &mut self,
        renderer: &mut dyn SceneRenderer,
        entities: &[Entity],
        selected: Option<&str>,
    ) {
        let stale: Vec<String> = self
            .shown
            .keys()
            .filter(|id| !entities.iter().any(|e| e.id() == id.as_str()))
            .cloned()
            .collect();
        for id in stale {
            self.shown.remove(&id);
            if self.highlighted.as_deref() == Some(id.as_str()) {
                self.highlighted = None;
            }
            renderer.destroy_proxy(&id);
        }

        for entity in entities {
            match self.shown.get_mut(entity.id()) {
                Some(shown) => {
                    if shown.transform_differs(entity) {
                        renderer.update_proxy(entity);
                        *shown = entity.clone();
                    }
                }
                None => {
                    renderer.create_proxy(entity);
                    self.shown.insert(entity.id().to_string(), entity.clone());
                }
            }
        }

        if self.highlighted.as_deref() != selected {
            if let Some(previous) = self.highlighted.take() {
                renderer.set_highlight(&previous, false);
            }
            if let Some(id) = selected.filter(|id| self.shown.contains_key(*id)) {
                renderer.set_highlight(id, true);
                self.highlighted = Some(id.to_string());
            }
        }
    }

    /// Number of proxies the renderer holds.
    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

/// Renderer that only logs proxy operations; used by headless sessions.
#[derive(Debug, Default)]
pub struct TracingRenderer;

impl SceneRenderer for TracingRenderer {
    fn create_proxy(&mut self, entity: &Entity) {
        tracing::debug!(
            "create {} ({}) at ({}, {})",
            entity.id(),
            entity.kind(),
            entity.x(),
            entity.y()
        );
    }

    fn destroy_proxy(&mut self, id: &str) {
        tracing::debug!("destroy {}", id);
    }

    fn update_proxy(&mut self, entity: &Entity) {
        tracing::debug!(
            "update {} to ({}, {}) rot {:.3} scale {:.2}",
            entity.id(),
            entity.x(),
            entity.y(),
            entity.rotation(),
            entity.scale()
        );
    }

    fn set_highlight(&mut self, id: &str, highlighted: bool) {
        tracing::debug!("highlight {} {}", id, highlighted);
    }
}
