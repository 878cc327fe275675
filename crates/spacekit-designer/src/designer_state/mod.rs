//! Designer state manager for UI integration.
//!
//! `DesignerState` is one editor session: the scene store, the interaction
//! controller with its camera, the session's event bus, an optional renderer,
//! and the file the layout came from. Views drive it through pointer methods
//! and [`DesignerCommand`]s and re-read it when notified.
//!
//! This module is split into submodules:
//! - `file_io`: Save/load operations

mod file_io;

use crate::commands::DesignerCommand;
use crate::interaction::{InteractionController, PointerEvent};
use crate::model::{ComponentType, Entity, Point};
use crate::renderer::{ProxySync, SceneRenderer};
use crate::scene_store::SceneStore;
use spacekit_core::EventBus;
use spacekit_settings::{Config, EditorSettings};
use std::path::PathBuf;
use std::sync::Arc;

struct RendererLink {
    renderer: Box<dyn SceneRenderer>,
    sync: ProxySync,
}

/// One editor session.
pub struct DesignerState {
    pub scene: SceneStore,
    pub interaction: InteractionController,
    events: Arc<EventBus>,
    renderer: Option<RendererLink>,
    editor: EditorSettings,
    pub current_file_path: Option<PathBuf>,
    pub design_name: String,
    saved_revision: u64,
}

impl DesignerState {
    /// Creates a session with default settings.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates a session using grid, history, and camera settings from `config`.
    pub fn from_config(config: &Config) -> Self {
        let events = Arc::new(EventBus::new());
        let scene = SceneStore::new(
            config.editor.grid_size,
            config.editor.history_limit,
            Arc::clone(&events),
        );
        let saved_revision = scene.revision();
        Self {
            scene,
            interaction: InteractionController::from_settings(&config.view),
            events,
            renderer: None,
            editor: config.editor.clone(),
            current_file_path: None,
            design_name: "Untitled".to_string(),
            saved_revision,
        }
    }

    /// The session's event bus.
    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    pub fn editor_settings(&self) -> &EditorSettings {
        &self.editor
    }

    /// Connects a rendering surface and brings it up to date.
    pub fn attach_renderer(&mut self, renderer: Box<dyn SceneRenderer>) {
        self.renderer = Some(RendererLink {
            renderer,
            sync: ProxySync::new(),
        });
        self.sync_renderer();
    }

    /// Disconnects the rendering surface, returning it.
    pub fn detach_renderer(&mut self) -> Option<Box<dyn SceneRenderer>> {
        self.renderer.take().map(|link| link.renderer)
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        self.interaction.pointer_down(&mut self.scene, event);
        self.sync_renderer();
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        self.interaction.pointer_move(&mut self.scene, event);
        self.sync_renderer();
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) {
        self.interaction.pointer_up(&mut self.scene, event);
        self.sync_renderer();
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.interaction.wheel(&self.scene, delta_y);
    }

    /// Aborts any pointer gesture in progress.
    pub fn cancel_gesture(&mut self) {
        self.interaction.cancel(&mut self.scene);
        self.sync_renderer();
    }

    /// Palette click: adds `kind` at the middle of the view.
    ///
    /// A drag in progress is cancelled first so its uncommitted position
    /// never reaches the history.
    pub fn add_component(&mut self, kind: ComponentType) -> Entity {
        self.interaction.cancel(&mut self.scene);
        let entity = self.interaction.place_at_view_center(&mut self.scene, kind);
        self.sync_renderer();
        entity
    }

    /// Palette drop: adds `kind` under the drop point.
    pub fn drop_component(&mut self, kind: ComponentType, screen: Point) -> Entity {
        self.interaction.cancel(&mut self.scene);
        let entity = self.interaction.drop_at(&mut self.scene, kind, screen);
        self.sync_renderer();
        entity
    }

    /// Runs one command.
    ///
    /// Commands whose preconditions are missing (nothing selected, nothing to
    /// undo) do nothing. Only file operations and layout loading can fail.
    /// `Show` returns the committed layout; every other command returns `None`.
    pub fn execute(&mut self, command: &DesignerCommand) -> anyhow::Result<Option<String>> {
        if !self.interaction.state().is_idle()
            && !matches!(
                command,
                DesignerCommand::Show
                    | DesignerCommand::ZoomIn
                    | DesignerCommand::ZoomOut
                    | DesignerCommand::ResetView
            )
        {
            self.interaction.cancel(&mut self.scene);
        }

        let mut output = None;
        match command {
            DesignerCommand::Add { kind, at: Some((x, y)) } => {
                self.scene.add_entity(*kind, *x, *y);
            }
            DesignerCommand::Add { kind, at: None } => {
                self.interaction.place_at_view_center(&mut self.scene, *kind);
            }
            DesignerCommand::Select(id) => self.scene.select(id.as_deref()),
            DesignerCommand::Move { id, x, y } => self.move_and_commit(id, *x, *y),
            DesignerCommand::Rotate(degrees) => {
                let degrees = degrees.unwrap_or(self.editor.rotation_step_degrees);
                self.scene.rotate_selected(degrees.to_radians());
            }
            DesignerCommand::Enlarge => {
                self.scene.scale_selected(self.editor.scale_step_up);
            }
            DesignerCommand::Shrink => {
                self.scene.scale_selected(self.editor.scale_step_down);
            }
            DesignerCommand::Scale(factor) => {
                self.scene.scale_selected(*factor);
            }
            DesignerCommand::Delete => {
                self.scene.delete_selected();
            }
            DesignerCommand::Undo => {
                self.scene.undo();
            }
            DesignerCommand::Redo => {
                self.scene.redo();
            }
            DesignerCommand::Save(path) => {
                let path = match path {
                    Some(path) => path.clone(),
                    None => self
                        .current_file_path
                        .clone()
                        .ok_or_else(|| anyhow::anyhow!("No file to save to; give a path"))?,
                };
                self.save_to_file(&path)?;
            }
            DesignerCommand::Load(path) => self.load_from_file(path)?,
            DesignerCommand::Clear => self.clear(),
            DesignerCommand::Show => output = Some(self.scene.serialize()?),
            DesignerCommand::ZoomIn => self.interaction.zoom_in(&self.scene),
            DesignerCommand::ZoomOut => self.interaction.zoom_out(&self.scene),
            DesignerCommand::ResetView => self.interaction.reset_view(&self.scene),
        }

        self.sync_renderer();
        Ok(output)
    }

    fn move_and_commit(&mut self, id: &str, x: f64, y: f64) {
        let Some(before) = self.scene.entity(id).map(Entity::position) else {
            tracing::debug!("Move of unknown entity {}", id);
            return;
        };
        self.scene.move_entity(id, x, y);
        if self.scene.entity(id).map(Entity::position) != Some(before) {
            self.scene.commit();
            self.scene.notify_selection();
        }
    }

    fn sync_renderer(&mut self) {
        if let Some(link) = self.renderer.as_mut() {
            link.sync.sync(
                link.renderer.as_mut(),
                self.scene.entities(),
                self.scene.selected_id(),
            );
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DesignerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignerState")
            .field("scene", &self.scene)
            .field("interaction", &self.interaction)
            .field("renderer", &self.renderer.is_some())
            .field("current_file_path", &self.current_file_path)
            .field("design_name", &self.design_name)
            .finish()
    }
}
