use crate::bitset;
use crate::error::{IconError, Result};
use crate::iconset::IconSet;
use crate::name::{IconName, NAME_FIELD_LEN};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, warn};
use std::io::{Read, Write};

//===========================================================================//

/// The signature that all iconset files start with.
pub const RGI_MAGIC: [u8; 4] = *b"rGI ";

/// The iconset file format version written (and accepted) by this crate.
pub const RGI_VERSION: u16 = 100;

// Magic, version, reserved, icon count, icon size.
const HEADER_LEN: usize = 4 + 2 + 2 + 2 + 2;

//===========================================================================//

/// Returns the exact size, in bytes, of an iconset file holding `icon_count`
/// icons of `words_per_icon` words each.
pub fn file_len(icon_count: usize, words_per_icon: usize) -> usize {
    HEADER_LEN + NAME_FIELD_LEN * icon_count + 4 * icon_count * words_per_icon
}

impl IconSet {
    /// Decodes an iconset file held in memory.  Nothing is returned unless
    /// the whole file is valid.
    pub fn decode_file(bytes: &[u8]) -> Result<IconSet> {
        let available = bytes.len();
        if available < HEADER_LEN {
            return Err(IconError::Truncated { needed: HEADER_LEN, available });
        }
        let mut reader = bytes;
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != RGI_MAGIC {
            return Err(IconError::BadMagic(magic));
        }
        let version = reader.read_u16::<LittleEndian>()?;
        if version != RGI_VERSION {
            return Err(IconError::UnsupportedVersion(version));
        }
        let reserved = reader.read_u16::<LittleEndian>()?;
        if reserved != 0 {
            warn!("Ignoring nonzero reserved field in iconset header ({})",
                  reserved);
        }
        let icon_count = reader.read_u16::<LittleEndian>()? as usize;
        let icon_size = reader.read_u16::<LittleEndian>()? as u32;
        let words_per_icon = bitset::words_per_icon(icon_size)?;
        if icon_count == 0 {
            return Err(IconError::InvalidCount(icon_count));
        }
        let needed = file_len(icon_count, words_per_icon);
        if available < needed {
            return Err(IconError::Truncated { needed, available });
        }
        if available > needed {
            warn!("Ignoring {} trailing bytes after iconset data",
                  available - needed);
        }
        let mut names = Vec::with_capacity(icon_count);
        for _ in 0..icon_count {
            let mut field = [0u8; NAME_FIELD_LEN];
            reader.read_exact(&mut field)?;
            names.push(IconName::from_bytes(field));
        }
        let mut data = vec![0u32; icon_count * words_per_icon];
        reader.read_u32_into::<LittleEndian>(&mut data)?;
        let icons = IconSet::from_parts(icon_size, names, data)?;
        debug!("Decoded {} icons of {}x{} pixels",
               icon_count, icon_size, icon_size);
        Ok(icons)
    }

    /// Reads a complete iconset file from `reader`.
    pub fn read<R: Read>(mut reader: R) -> Result<IconSet> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        IconSet::decode_file(&bytes)
    }

    /// Encodes this icon set as an iconset file.  The output depends only on
    /// the icon set's contents.
    pub fn encode_file(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity(file_len(self.icon_count(),
                                        self.words_per_icon()));
        let result = self.write(&mut bytes);
        debug_assert!(result.is_ok(), "writing into a Vec failed");
        bytes
    }

    /// Writes this icon set out as an iconset file.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        // Both fit in 16 bits; IconSet::blank enforces it.
        debug_assert!(self.icon_count() <= u16::MAX as usize);
        debug_assert!(self.icon_size() <= u16::MAX as u32);
        writer.write_all(&RGI_MAGIC)?;
        writer.write_u16::<LittleEndian>(RGI_VERSION)?;
        writer.write_u16::<LittleEndian>(0)?; // reserved
        writer.write_u16::<LittleEndian>(self.icon_count() as u16)?;
        writer.write_u16::<LittleEndian>(self.icon_size() as u16)?;
        for name in self.names() {
            writer.write_all(name.as_bytes())?;
        }
        for &word in self.data() {
            writer.write_u32::<LittleEndian>(word)?;
        }
        Ok(())
    }
}

//===========================================================================//


//===========================================================================//
