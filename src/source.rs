//! Generation of a C header embedding an icon set as a word array.

use crate::iconset::IconSet;
use std::collections::HashSet;
use std::fmt::Write;

//===========================================================================//

// Words per line in the array literal.
const WORDS_PER_LINE: usize = 8;

//===========================================================================//

/// Turns an icon name into a C identifier fragment: uppercase ASCII letters,
/// digits and underscores only.  Returns `None` if nothing usable is left.
pub fn identifier_fragment(name: &str) -> Option<String> {
    let mut fragment = String::with_capacity(name.len());
    for chr in name.trim().chars() {
        if chr.is_ascii_alphanumeric() {
            fragment.push(chr.to_ascii_uppercase());
        } else if !fragment.ends_with('_') {
            fragment.push('_');
        }
    }
    let fragment = fragment.trim_matches('_');
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    }
}

/// Returns the enumerator for every icon, in icon order.  Unnamed icons get
/// `ICON_` plus their zero-padded index; names that collide with an earlier
/// enumerator get their index appended.
pub fn icon_identifiers(icons: &IconSet) -> Vec<String> {
    let mut used = HashSet::<String>::new();
    let mut identifiers = Vec::with_capacity(icons.icon_count());
    for (id, name) in icons.names().iter().enumerate() {
        let mut identifier = match identifier_fragment(&name.text()) {
            Some(fragment) => format!("ICON_{}", fragment),
            None => format!("ICON_{:03}", id),
        };
        while used.contains(&identifier) {
            identifier = format!("{}_{}", identifier, id);
        }
        used.insert(identifier.clone());
        identifiers.push(identifier);
    }
    identifiers
}

impl IconSet {
    /// Generates a C header with size/count constants, an enum of icon
    /// names, and the packed icon data as an array literal with one comment
    /// per icon.
    pub fn to_source_code(&self) -> String {
        let mut text = String::new();
        let result = self.write_source_code(&mut text);
        debug_assert!(result.is_ok(), "writing into a String failed");
        text
    }

    fn write_source_code(&self, out: &mut String) -> std::fmt::Result {
        let identifiers = icon_identifiers(self);
        let rule = "/".repeat(80);
        writeln!(out, "{}", rule)?;
        writeln!(out, "{:<78}//", "//")?;
        writeln!(out, "{:<78}//", "// Icon set data (1 bit per pixel)")?;
        writeln!(out, "{:<78}//", "//")?;
        writeln!(
            out,
            "{:<78}//",
            format!(
                "// {} icons of {}x{} pixels, {} words per icon",
                self.icon_count(),
                self.icon_size(),
                self.icon_size(),
                self.words_per_icon()
            )
        )?;
        writeln!(out, "{:<78}//", "//")?;
        writeln!(out, "{}", rule)?;
        writeln!(out)?;
        writeln!(out, "#define RAYGUI_ICON_SIZE {:>16}", self.icon_size())?;
        writeln!(
            out,
            "#define RAYGUI_ICON_MAX_ICONS {:>11}",
            self.icon_count()
        )?;
        writeln!(
            out,
            "#define RAYGUI_ICON_DATA_ELEMENTS   \
             (RAYGUI_ICON_SIZE*RAYGUI_ICON_SIZE/32)"
        )?;
        writeln!(out)?;
        writeln!(out, "typedef enum {{")?;
        for (id, identifier) in identifiers.iter().enumerate() {
            writeln!(out, "    {} = {},", identifier, id)?;
        }
        writeln!(out, "}} guiIconName;")?;
        writeln!(out)?;
        writeln!(
            out,
            "static unsigned int guiIcons[\
             RAYGUI_ICON_MAX_ICONS*RAYGUI_ICON_DATA_ELEMENTS] = {{"
        )?;
        for (id, identifier) in identifiers.iter().enumerate() {
            let start = id * self.words_per_icon();
            let words = &self.data()[start..(start + self.words_per_icon())];
            let lines: Vec<&[u32]> = words.chunks(WORDS_PER_LINE).collect();
            for (index, line) in lines.iter().enumerate() {
                let hex: Vec<String> = line
                    .iter()
                    .map(|word| format!("0x{:08x}", word))
                    .collect();
                write!(out, "    {},", hex.join(", "))?;
                if index + 1 == lines.len() {
                    write!(out, "      // {}", identifier)?;
                }
                writeln!(out)?;
            }
        }
        writeln!(out, "}};")?;
        Ok(())
    }
}

//===========================================================================//


//===========================================================================//
