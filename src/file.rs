use crate::error::Result;
use crate::iconset::IconSet;
use log::info;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

//===========================================================================//

/// The kinds of file an icon set can be written to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum ExportFormat {
    /// Binary iconset file (`.rgi`); lossless.
    Rgi,
    /// Grayscale PNG atlas with the names embedded (`.png`).
    Png,
    /// C header with the data baked in (`.h`).
    Header,
}

impl ExportFormat {
    /// Picks the format matching a path's extension (case-insensitively), or
    /// `None` if the extension is missing or unsupported.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "rgi" => Some(ExportFormat::Rgi),
            "png" => Some(ExportFormat::Png),
            "h" => Some(ExportFormat::Header),
            _ => None,
        }
    }

    /// Returns the usual file extension for this format.
    pub fn extension(&self) -> &'static str {
        match *self {
            ExportFormat::Rgi => "rgi",
            ExportFormat::Png => "png",
            ExportFormat::Header => "h",
        }
    }
}

//===========================================================================//

/// How icons are arranged in an exported PNG atlas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct AtlasLayout {
    /// Icons per row of the atlas.
    pub icons_per_line: u32,
    /// Black pixels framing each icon on every side.
    pub padding: u32,
}

impl Default for AtlasLayout {
    fn default() -> AtlasLayout {
        AtlasLayout { icons_per_line: 16, padding: 1 }
    }
}

//===========================================================================//

/// Replaces the file at `path` with `bytes`.  The data goes to a temporary
/// file in the same directory which is then renamed over the destination,
/// so a failure never leaves a partial file behind.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|error| error.error)?;
    Ok(())
}

impl IconSet {
    /// Loads an iconset file from disk.
    pub fn load(path: &Path) -> Result<IconSet> {
        let bytes = fs::read(path)?;
        let icons = IconSet::decode_file(&bytes)?;
        info!("Loaded {} icons from {}", icons.icon_count(), path.display());
        Ok(icons)
    }

    /// Saves this icon set as an iconset file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.export(path, ExportFormat::Rgi, AtlasLayout::default())
    }

    /// Encodes this icon set in the given format, entirely in memory.
    pub fn export_bytes(
        &self,
        format: ExportFormat,
        layout: AtlasLayout,
    ) -> Result<Vec<u8>> {
        match format {
            ExportFormat::Rgi => Ok(self.encode_file()),
            ExportFormat::Png => {
                let mut bytes = Vec::new();
                self.write_png(&mut bytes, layout.icons_per_line,
                               layout.padding)?;
                Ok(bytes)
            }
            ExportFormat::Header => Ok(self.to_source_code().into_bytes()),
        }
    }

    /// Writes this icon set to `path` in the given format.  The destination
    /// is only touched once the whole output has been produced.
    pub fn export(
        &self,
        path: &Path,
        format: ExportFormat,
        layout: AtlasLayout,
    ) -> Result<()> {
        let bytes = self.export_bytes(format, layout)?;
        write_atomic(path, &bytes)?;
        info!("Wrote {:?} file {} ({} bytes)", format, path.display(),
              bytes.len());
        Ok(())
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{write_atomic, AtlasLayout, ExportFormat};
    use crate::iconset::IconSet;
    use std::fs;
    use std::path::Path;

    #[test]
    fn format_from_extension() {
        let cases = [
            ("icons.rgi", Some(ExportFormat::Rgi)),
            ("ICONS.PNG", Some(ExportFormat::Png)),
            ("dir/icons.h", Some(ExportFormat::Header)),
            ("icons.ico", None),
            ("icons", None),
        ];
        for &(path, format) in cases.iter() {
            assert_eq!(ExportFormat::from_path(Path::new(path)), format);
        }
    }

    #[test]
    fn format_extension_round_trip() {
        let formats =
            [ExportFormat::Rgi, ExportFormat::Png, ExportFormat::Header];
        for &format in formats.iter() {
            let path = format!("out.{}", format.extension());
            assert_eq!(ExportFormat::from_path(Path::new(&path)),
                       Some(format));
        }
    }

    #[test]
    fn write_atomic_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.rgi");
        fs::write(&path, b"old contents").unwrap();
        write_atomic(&path, b"new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_atomic_into_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icons.rgi");
        assert!(write_atomic(&path, b"data").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.rgi");
        let mut icons = IconSet::default();
        icons.set_pixel(9, 1, 2).unwrap();
        icons.rename_icon(9, "NINE").unwrap();
        icons.save(&path).unwrap();
        assert_eq!(IconSet::load(&path).unwrap(), icons);
    }

    #[test]
    fn export_bytes_per_format() {
        let icons = IconSet::blank(2, 16).unwrap();
        let layout = AtlasLayout::default();
        let rgi = icons.export_bytes(ExportFormat::Rgi, layout).unwrap();
        assert!(rgi.starts_with(b"rGI "));
        let png = icons.export_bytes(ExportFormat::Png, layout).unwrap();
        assert!(png.starts_with(b"\x89PNG"));
        let header = icons.export_bytes(ExportFormat::Header, layout).unwrap();
        assert!(header.starts_with(b"////"));
    }
}

//===========================================================================//
