use crate::error::Result;
use crate::file::{AtlasLayout, ExportFormat};
use crate::history::{UndoRing, DEFAULT_UNDO_CAPACITY};
use crate::iconset::{IconClip, IconSet};
use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::Path;

//===========================================================================//

/// Number of editor frames between undo snapshots.
pub const DEFAULT_COMMIT_INTERVAL: u32 = 120;

//===========================================================================//

/// Tunable parameters of an editing session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct SessionConfig {
    /// Number of snapshots kept in the undo history.
    pub undo_capacity: usize,
    /// Frames without an exclusive dialog open between undo snapshots.
    pub commit_interval: u32,
    /// Layout used when exporting a PNG atlas.
    pub layout: AtlasLayout,
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            undo_capacity: DEFAULT_UNDO_CAPACITY,
            commit_interval: DEFAULT_COMMIT_INTERVAL,
            layout: AtlasLayout::default(),
        }
    }
}

//===========================================================================//

/// One icon editor: the live icon set, its undo history, the clipboard and
/// the currently selected icon.
///
/// The session owns its icon set outright.  `defaults` is a private copy of
/// the set that "New" restores; it is never edited.
pub struct EditorSession {
    config: SessionConfig,
    defaults: IconSet,
    icons: IconSet,
    saved: IconSet,
    history: UndoRing<IconSet>,
    clipboard: Option<IconClip>,
    selected: usize,
    frames: u32,
}

impl EditorSession {
    /// Starts a session editing a copy of `defaults`.  Panics if
    /// `config.undo_capacity` is zero.
    pub fn new(defaults: IconSet, config: SessionConfig) -> EditorSession {
        let history = UndoRing::new(config.undo_capacity, &defaults);
        EditorSession {
            config,
            icons: defaults.clone(),
            saved: defaults.clone(),
            defaults,
            history,
            clipboard: None,
            selected: 0,
            frames: 0,
        }
    }

    /// Returns the session's configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the live icon set.
    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// Returns the undo history.
    pub fn history(&self) -> &UndoRing<IconSet> {
        &self.history
    }

    /// Returns the clipboard contents, if anything was cut or copied.
    pub fn clipboard(&self) -> Option<&IconClip> {
        self.clipboard.as_ref()
    }

    /// Returns the id of the selected icon.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Selects icon `id`.
    pub fn select(&mut self, id: usize) -> Result<()> {
        self.icons.name(id)?;
        self.selected = id;
        Ok(())
    }

    /// Returns true if the icons differ from the last loaded or saved state.
    pub fn is_modified(&self) -> bool {
        self.icons != self.saved
    }

    /// Advances the editor by one frame.  Every `commit_interval` frames
    /// with no exclusive dialog open, a changed icon set is committed to the
    /// undo history.  Returns true if a snapshot was committed.
    pub fn frame(&mut self, dialog_open: bool) -> bool {
        if dialog_open {
            return false;
        }
        self.frames += 1;
        if self.frames < self.config.commit_interval.max(1) {
            return false;
        }
        self.frames = 0;
        self.history.tick(&self.icons)
    }

    /// Commits any pending change to the undo history right away.
    pub fn commit(&mut self) -> bool {
        self.frames = 0;
        self.history.tick(&self.icons)
    }

    /// Reverts to the previous snapshot.  Returns false at the oldest one.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.icons)
    }

    /// Re-applies the most recently undone snapshot.  Returns false if there
    /// is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.icons)
    }

    /// Flips pixel `(x, y)` of the selected icon and returns its new value.
    pub fn toggle_pixel(&mut self, x: u32, y: u32) -> Result<bool> {
        self.icons.toggle_pixel(self.selected, x, y)
    }

    /// Sets pixel `(x, y)` of the selected icon.
    pub fn set_pixel(&mut self, x: u32, y: u32) -> Result<()> {
        self.icons.set_pixel(self.selected, x, y)
    }

    /// Clears pixel `(x, y)` of the selected icon.
    pub fn clear_pixel(&mut self, x: u32, y: u32) -> Result<()> {
        self.icons.clear_pixel(self.selected, x, y)
    }

    /// Copies the selected icon to the clipboard.
    pub fn copy(&mut self) -> Result<()> {
        self.clipboard = Some(self.icons.copy_icon(self.selected)?);
        Ok(())
    }

    /// Moves the selected icon to the clipboard, clearing its bits and name.
    pub fn cut(&mut self) -> Result<()> {
        self.clipboard = Some(self.icons.cut_icon(self.selected)?);
        Ok(())
    }

    /// Pastes the clipboard over the selected icon.  Returns false if the
    /// clipboard is empty.
    pub fn paste(&mut self) -> Result<bool> {
        match self.clipboard {
            Some(ref clip) => {
                self.icons.paste_icon(self.selected, clip)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clears the selected icon's bits and name.
    pub fn delete(&mut self) -> Result<()> {
        self.icons.clear_icon(self.selected)
    }

    /// Renames the selected icon.
    pub fn rename(&mut self, name: &str) -> Result<()> {
        self.icons.rename_icon(self.selected, name)
    }

    /// Replaces the icons with a fresh copy of the defaults and starts a new
    /// history.
    pub fn new_iconset(&mut self) {
        let defaults = self.defaults.clone();
        self.install(defaults);
        info!("Reset icon set to defaults");
    }

    fn install(&mut self, icons: IconSet) {
        self.history.reset(&icons);
        self.saved = icons.clone();
        self.icons = icons;
        self.frames = 0;
        if self.selected >= self.icons.icon_count() {
            self.selected = 0;
        }
    }

    /// Loads an iconset file, replacing the live icons and history.  On
    /// failure the session is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let icons = IconSet::load(path)?;
        self.install(icons);
        Ok(())
    }

    /// Saves the live icons as an iconset file.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.icons.save(path)?;
        self.saved = self.icons.clone();
        debug!("Marked session as saved");
        Ok(())
    }

    /// Exports the live icons to `path` in the given format.
    pub fn export(&self, path: &Path, format: ExportFormat) -> Result<()> {
        self.icons.export(path, format, self.config.layout)
    }
}

impl Default for EditorSession {
    fn default() -> EditorSession {
        EditorSession::new(IconSet::default(), SessionConfig::default())
    }
}

//===========================================================================//


//===========================================================================//
