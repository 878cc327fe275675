//! File I/O operations (save, load, new) for designer state.

use super::DesignerState;
use anyhow::Context;
use spacekit_core::{AppEvent, FileEvent};
use std::path::Path;

impl DesignerState {
    /// Save the committed layout to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = self.scene.serialize()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write layout to {}", path.display()))?;

        let entity_count = self.scene.committed().len();
        tracing::info!("Saved {} entities to {}", entity_count, path.display());
        self.events.notify(AppEvent::File(FileEvent::Saved {
            path: Some(path.to_path_buf()),
            entity_count,
        }));

        self.current_file_path = Some(path.to_path_buf());
        self.saved_revision = self.scene.revision();
        Ok(())
    }

    /// Load a layout from file, replacing the scene.
    ///
    /// Any drag in progress is cancelled first. A file that cannot be read or
    /// parsed leaves the scene and history unchanged.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.interaction.cancel(&mut self.scene);
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                self.events.notify(AppEvent::File(FileEvent::LoadFailed {
                    reason: e.to_string(),
                }));
                return Err(e)
                    .with_context(|| format!("Failed to read layout from {}", path.display()));
            }
        };

        self.scene
            .load_layout(&text, Some(path))
            .with_context(|| format!("Invalid layout in {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.saved_revision = self.scene.revision();
        self.sync_renderer();
        Ok(())
    }

    /// Empty the scene, keeping the current file association.
    pub fn clear(&mut self) {
        self.interaction.cancel(&mut self.scene);
        self.scene.clear();
        self.sync_renderer();
    }

    /// Start a new, untitled layout.
    pub fn new_design(&mut self) {
        self.interaction.cancel(&mut self.scene);
        self.scene.clear();
        self.current_file_path = None;
        self.design_name = "Untitled".to_string();
        self.saved_revision = self.scene.revision();
        self.sync_renderer();
    }

    /// True when the committed scene differs from what was last saved or loaded.
    pub fn is_modified(&self) -> bool {
        self.scene.revision() != self.saved_revision
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.design_name);

        if self.is_modified() {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
