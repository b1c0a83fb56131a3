//! A library for editing, storing and exporting sets of small 1-bit GUI
//! icons.
//!
//! Each icon is a square monochrome bitmap (16x16 in the standard set)
//! packed into 32-bit words.  An [`IconSet`] holds a fixed number of icons
//! and their names, and can be saved to the binary `.rgi` format, rendered
//! to a PNG atlas, or turned into a C header.  An [`EditorSession`] adds a
//! coalesced undo history and a clipboard on top.
//!
//! ```
//! use rguiicons::IconSet;
//!
//! let mut icons = IconSet::blank(4, 16).unwrap();
//! icons.set_pixel(2, 0, 0).unwrap();
//! icons.rename_icon(2, "CORNER").unwrap();
//! let bytes = icons.encode_file();
//! assert_eq!(IconSet::decode_file(&bytes).unwrap(), icons);
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod bitset;
mod error;
mod file;
mod history;
mod iconset;
mod image;
mod name;
mod rgi;
mod session;
pub mod source;

pub use crate::error::{IconError, Result};
pub use crate::file::{write_atomic, AtlasLayout, ExportFormat};
pub use crate::history::{UndoRing, DEFAULT_UNDO_CAPACITY};
pub use crate::iconset::{
    IconClip, IconSet, DEFAULT_ICON_COUNT, DEFAULT_ICON_SIZE,
};
pub use crate::image::{
    grid_size, IconGrid, BLACK, MAX_GRID_PIXELS, NAMES_KEYWORD,
    NAME_SEPARATOR, WHITE,
};
pub use crate::name::{IconName, MAX_NAME_LEN, NAME_FIELD_LEN};
pub use crate::rgi::{file_len, RGI_MAGIC, RGI_VERSION};
pub use crate::session::{
    EditorSession, SessionConfig, DEFAULT_COMMIT_INTERVAL,
};
