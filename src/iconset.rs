use crate::bitset;
use crate::error::{IconError, Result};
use crate::name::IconName;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

/// Number of icons in the standard GUI icon set.
pub const DEFAULT_ICON_COUNT: usize = 256;

/// Side length, in pixels, of icons in the standard GUI icon set.
pub const DEFAULT_ICON_SIZE: u32 = 16;

const DEFAULT_WORDS_PER_ICON: usize =
    (DEFAULT_ICON_SIZE * DEFAULT_ICON_SIZE / 32) as usize;

// The file format stores the icon count in 16 bits.
const MAX_ICON_COUNT: usize = u16::MAX as usize;

//===========================================================================//

/// A fixed-size collection of square 1-bit icons and their names.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "IconSetParts", into = "IconSetParts")
)]
pub struct IconSet {
    icon_size: u32,
    words_per_icon: usize,
    names: Vec<IconName>,
    data: Vec<u32>,
}

impl IconSet {
    /// Creates an icon set of `icon_count` empty, unnamed icons with the
    /// given side length.
    pub fn blank(icon_count: usize, icon_size: u32) -> Result<IconSet> {
        let words_per_icon = bitset::words_per_icon(icon_size)?;
        if icon_size > u16::MAX as u32 {
            return Err(IconError::InvalidSize(icon_size));
        }
        if icon_count == 0 || icon_count > MAX_ICON_COUNT {
            return Err(IconError::InvalidCount(icon_count));
        }
        Ok(IconSet {
            icon_size,
            words_per_icon,
            names: vec![IconName::empty(); icon_count],
            data: vec![0; icon_count * words_per_icon],
        })
    }

    /// Builds an icon set from a name table and packed bit data.  The data
    /// must hold exactly `names.len()` icons.
    pub fn from_parts(
        icon_size: u32,
        names: Vec<IconName>,
        data: Vec<u32>,
    ) -> Result<IconSet> {
        let mut icons = IconSet::blank(names.len(), icon_size)?;
        if data.len() != icons.data.len() {
            return Err(IconError::DataLength {
                expected: icons.data.len(),
                actual: data.len(),
            });
        }
        icons.names = names;
        icons.data = data;
        Ok(icons)
    }

    /// Returns the number of icons in the set.
    pub fn icon_count(&self) -> usize {
        self.names.len()
    }

    /// Returns the side length of each icon, in pixels.
    pub fn icon_size(&self) -> u32 {
        self.icon_size
    }

    /// Returns the number of 32-bit words used by each icon.
    pub fn words_per_icon(&self) -> usize {
        self.words_per_icon
    }

    /// Returns the packed bit data of every icon, in icon order.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Returns the names of every icon, in icon order.
    pub fn names(&self) -> &[IconName] {
        &self.names
    }

    fn check_id(&self, id: usize) -> Result<()> {
        if id >= self.icon_count() {
            out_of_range!("icon id", id, self.icon_count());
        }
        Ok(())
    }

    fn icon_words(&self, id: usize) -> std::ops::Range<usize> {
        let start = id * self.words_per_icon;
        start..(start + self.words_per_icon)
    }

    /// Returns the name of icon `id`.
    pub fn name(&self, id: usize) -> Result<&IconName> {
        self.check_id(id)?;
        Ok(&self.names[id])
    }

    /// Renames icon `id`.  Names longer than the fixed field are truncated;
    /// duplicates are allowed.
    pub fn rename_icon(&mut self, id: usize, name: &str) -> Result<()> {
        self.check_id(id)?;
        self.names[id] = IconName::new(name);
        Ok(())
    }

    /// Returns a copy of the packed bit data of icon `id`.
    pub fn get_icon_data(&self, id: usize) -> Result<Vec<u32>> {
        self.check_id(id)?;
        Ok(self.data[self.icon_words(id)].to_vec())
    }

    /// Overwrites the packed bit data of icon `id`, leaving its name as is.
    pub fn set_icon_data(&mut self, id: usize, words: &[u32]) -> Result<()> {
        self.check_id(id)?;
        if words.len() != self.words_per_icon {
            return Err(IconError::DataLength {
                expected: self.words_per_icon,
                actual: words.len(),
            });
        }
        let range = self.icon_words(id);
        self.data[range].copy_from_slice(words);
        Ok(())
    }

    /// Clears every pixel of icon `id` *and* resets its name to empty.  An
    /// icon with no pixels keeps no label; delete and cut both rely on this.
    pub fn clear_icon(&mut self, id: usize) -> Result<()> {
        self.check_id(id)?;
        let range = self.icon_words(id);
        self.data[range].iter_mut().for_each(|word| *word = 0);
        self.names[id] = IconName::empty();
        Ok(())
    }

    /// Returns true if icon `id` has no pixels set.
    pub fn is_icon_empty(&self, id: usize) -> Result<bool> {
        self.check_id(id)?;
        Ok(self.data[self.icon_words(id)].iter().all(|&word| word == 0))
    }

    /// Copies the bits and name of icon `id`.
    pub fn copy_icon(&self, id: usize) -> Result<IconClip> {
        Ok(IconClip {
            data: self.get_icon_data(id)?,
            name: *self.name(id)?,
        })
    }

    /// Copies icon `id` and then clears it.
    pub fn cut_icon(&mut self, id: usize) -> Result<IconClip> {
        let clip = self.copy_icon(id)?;
        self.clear_icon(id)?;
        Ok(clip)
    }

    /// Overwrites the bits and name of icon `id` with a clip.
    pub fn paste_icon(&mut self, id: usize, clip: &IconClip) -> Result<()> {
        self.set_icon_data(id, &clip.data)?;
        self.names[id] = clip.name;
        Ok(())
    }

    /// Returns true if pixel `(x, y)` of icon `id` is set.
    pub fn get_pixel(&self, id: usize, x: u32, y: u32) -> Result<bool> {
        bitset::get_pixel(&self.data, self.icon_size, id, x, y)
    }

    /// Sets pixel `(x, y)` of icon `id`.
    pub fn set_pixel(&mut self, id: usize, x: u32, y: u32) -> Result<()> {
        bitset::set_pixel(&mut self.data, self.icon_size, id, x, y)
    }

    /// Clears pixel `(x, y)` of icon `id`.
    pub fn clear_pixel(&mut self, id: usize, x: u32, y: u32) -> Result<()> {
        bitset::clear_pixel(&mut self.data, self.icon_size, id, x, y)
    }

    /// Flips pixel `(x, y)` of icon `id` and returns its new value.
    pub fn toggle_pixel(&mut self, id: usize, x: u32, y: u32) -> Result<bool> {
        bitset::toggle_pixel(&mut self.data, self.icon_size, id, x, y)
    }
}

impl Default for IconSet {
    /// A blank set of 256 unnamed 16x16 icons.
    fn default() -> IconSet {
        IconSet {
            icon_size: DEFAULT_ICON_SIZE,
            words_per_icon: DEFAULT_WORDS_PER_ICON,
            names: vec![IconName::empty(); DEFAULT_ICON_COUNT],
            data: vec![0; DEFAULT_ICON_COUNT * DEFAULT_WORDS_PER_ICON],
        }
    }
}

// Serialized form of an icon set; deserializing goes through `from_parts`
// so the word count always matches the names.
#[cfg(feature = "serde")]
#[derive(Deserialize, Serialize)]
struct IconSetParts {
    icon_size: u32,
    names: Vec<IconName>,
    data: Vec<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<IconSetParts> for IconSet {
    type Error = IconError;

    fn try_from(parts: IconSetParts) -> Result<IconSet> {
        IconSet::from_parts(parts.icon_size, parts.names, parts.data)
    }
}

#[cfg(feature = "serde")]
impl From<IconSet> for IconSetParts {
    fn from(icons: IconSet) -> IconSetParts {
        IconSetParts {
            icon_size: icons.icon_size,
            names: icons.names,
            data: icons.data,
        }
    }
}

//===========================================================================//

/// The contents of one icon, as held on the clipboard between cut/copy and
/// paste.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IconClip {
    /// Packed bit data of the icon.
    pub data: Vec<u32>,
    /// Name of the icon.
    pub name: IconName,
}

//===========================================================================//


//===========================================================================//
