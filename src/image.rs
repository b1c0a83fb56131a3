use crate::error::Result;
use crate::iconset::IconSet;
use log::debug;
use std::io::{Read, Write};

//===========================================================================//

/// Gray level of a set icon pixel.
pub const WHITE: u8 = u8::MAX;

/// Gray level of a clear icon pixel and of the padding around icons.
pub const BLACK: u8 = 0;

/// PNG text chunk keyword under which icon names are embedded.
pub const NAMES_KEYWORD: &str = "rIconNames";

/// Separator between icon names in the embedded text chunk.
pub const NAME_SEPARATOR: char = ';';

/// Largest grid, in pixels, that a layout may produce.
pub const MAX_GRID_PIXELS: u32 = 1 << 28;

//===========================================================================//

/// An 8-bit grayscale image laying out the icons of a set in a grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconGrid {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    names: Option<String>,
}

impl IconGrid {
    /// Creates a new image with the given dimensions and gray levels, in
    /// row-major order from top to bottom.  Panics if either dimension is
    /// zero or if `pixels` is the wrong length.
    pub fn from_gray_data(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> IconGrid {
        if width == 0 || height == 0 {
            panic!("Invalid grid dimensions ({}x{})", width, height);
        }
        let expected_len = (width as u64) * (height as u64);
        if (pixels.len() as u64) != expected_len {
            panic!(
                "Invalid data length (was {}, but must be {} for {}x{} grid)",
                pixels.len(),
                expected_len,
                width,
                height
            );
        }
        IconGrid { width, height, pixels, names: None }
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the gray levels, in row-major order from top to bottom.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the gray level at `(x, y)`.  Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Returns the semicolon-joined icon names carried by the image, if any.
    pub fn names_text(&self) -> Option<&str> {
        self.names.as_deref()
    }

    /// Attaches (or removes) semicolon-joined icon names to embed when
    /// writing the image as a PNG.
    pub fn set_names_text(&mut self, names: Option<String>) {
        self.names = names;
    }

    /// Encodes the image as an 8-bit grayscale PNG.  Any names go in a
    /// compressed (zTXt) text chunk.
    pub fn write_png<W: Write>(&self, writer: W) -> Result<()> {
        self.encode_png(writer, true)
    }

    /// Like `write_png`, but with the names in a plain (tEXt) text chunk,
    /// as used for single icons.
    pub fn write_png_plain_text<W: Write>(&self, writer: W) -> Result<()> {
        self.encode_png(writer, false)
    }

    fn encode_png<W: Write>(
        &self,
        writer: W,
        compress_names: bool,
    ) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        if let Some(ref names) = self.names {
            let text = latin1_lossy(names);
            if compress_names {
                encoder.add_ztxt_chunk(NAMES_KEYWORD.to_string(), text)?;
            } else {
                encoder.add_text_chunk(NAMES_KEYWORD.to_string(), text)?;
            }
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        Ok(())
    }

    /// Decodes a PNG into a grayscale grid.  Color images are reduced to the
    /// darkest channel (alpha included), so that only pure opaque white stays
    /// white.  Any embedded icon names are kept.
    pub fn read_png<R: Read>(reader: R) -> Result<IconGrid> {
        let decoder = png::Decoder::new(reader);
        let mut png_reader = decoder.read_info()?;
        let info = png_reader.info();
        if info.bit_depth != png::BitDepth::Eight {
            invalid_image!("Unsupported PNG bit depth: {:?}", info.bit_depth);
        }
        let channels = match info.color_type {
            png::ColorType::Grayscale => 1,
            png::ColorType::GrayscaleAlpha => 2,
            png::ColorType::Rgb => 3,
            png::ColorType::Rgba => 4,
            png::ColorType::Indexed => {
                invalid_image!(
                    "Unsupported PNG color type: {:?}",
                    info.color_type
                );
            }
        };
        let mut names = None;
        for chunk in info.compressed_latin1_text.iter() {
            if chunk.keyword == NAMES_KEYWORD {
                names = Some(chunk.get_text()?);
            }
        }
        for chunk in info.uncompressed_latin1_text.iter() {
            if chunk.keyword == NAMES_KEYWORD {
                names = Some(chunk.text.clone());
            }
        }
        let (width, height) = (info.width, info.height);
        let mut buffer = vec![0u8; png_reader.output_buffer_size()];
        png_reader.next_frame(&mut buffer)?;
        let num_pixels = (width as usize) * (height as usize);
        let pixels: Vec<u8> = buffer
            .chunks_exact(channels)
            .take(num_pixels)
            .map(|pixel| pixel.iter().copied().min().unwrap_or(BLACK))
            .collect();
        if pixels.len() != num_pixels {
            invalid_image!("PNG data too short for {}x{} image", width,
                           height);
        }
        let mut grid = IconGrid::from_gray_data(width, height, pixels);
        grid.names = names;
        Ok(grid)
    }
}

// PNG text chunks only hold ISO-8859-1.
fn latin1_lossy(text: &str) -> String {
    text.chars()
        .map(|chr| if (chr as u32) < 0x100 { chr } else { '?' })
        .collect()
}

//===========================================================================//

/// Returns the `(width, height)` of a grid holding `icon_count` icons.
pub fn grid_size(
    icon_count: usize,
    icon_size: u32,
    icons_per_line: u32,
    padding: u32,
) -> Result<(u32, u32)> {
    if icons_per_line == 0 {
        invalid_image!("Icons per line must be at least 1");
    }
    let cell = cell_size(icon_size, padding)?;
    let (count, per_line) = (icon_count as u64, icons_per_line as u64);
    let lines = count / per_line + u64::from(count % per_line != 0);
    let width = cell.checked_mul(icons_per_line);
    let height = u32::try_from(lines).ok().and_then(|n| cell.checked_mul(n));
    match (width, height) {
        (Some(width), Some(height))
            if width
                .checked_mul(height)
                .map_or(false, |pixels| pixels <= MAX_GRID_PIXELS) =>
        {
            Ok((width, height))
        }
        _ => invalid_image!(
            "{} icons of {}px, {} per line with {}px padding, is too large",
            icon_count,
            icon_size,
            icons_per_line,
            padding
        ),
    }
}

// Side length of one icon plus its padding on both sides.
fn cell_size(icon_size: u32, padding: u32) -> Result<u32> {
    match padding.checked_mul(2).and_then(|p| p.checked_add(icon_size)) {
        Some(cell) => Ok(cell),
        None => invalid_image!("Padding of {}px is too large", padding),
    }
}

// Joined names must split back into one entry per icon.
fn sanitize_name(name: &str) -> String {
    name.replace(NAME_SEPARATOR, "_")
}

impl IconSet {
    /// Returns every name, in icon order, joined with `;`.  A `;` inside a
    /// name is written as `_`.
    pub fn names_text(&self) -> String {
        let names: Vec<String> = self
            .names()
            .iter()
            .map(|name| sanitize_name(&name.text()))
            .collect();
        names.join(&NAME_SEPARATOR.to_string())
    }

    /// Renders the icons into a grid, `icons_per_line` to a row, each framed
    /// by `padding` black pixels on every side.  Set bits become white and
    /// clear bits black.  The grid carries the joined icon names.
    pub fn to_image(
        &self,
        icons_per_line: u32,
        padding: u32,
    ) -> Result<IconGrid> {
        let size = self.icon_size();
        let (width, height) =
            grid_size(self.icon_count(), size, icons_per_line, padding)?;
        let cell = cell_size(size, padding)?;
        let mut pixels = vec![BLACK; (width as usize) * (height as usize)];
        for id in 0..self.icon_count() {
            let left = (id as u32 % icons_per_line) * cell + padding;
            let top = (id as u32 / icons_per_line) * cell + padding;
            for y in 0..size {
                let row = ((top + y) as usize) * (width as usize);
                for x in 0..size {
                    if self.get_pixel(id, x, y)? {
                        pixels[row + (left + x) as usize] = WHITE;
                    }
                }
            }
        }
        debug!("Rendered {} icons into a {}x{} grid",
               self.icon_count(), width, height);
        let mut grid = IconGrid::from_gray_data(width, height, pixels);
        grid.names = Some(self.names_text());
        Ok(grid)
    }

    /// Rebuilds an icon set from a grid laid out as by `to_image`.  A bit is
    /// set only where the pixel is pure white; names come from the grid's
    /// embedded text, if present.  Fails unless the grid's dimensions match
    /// the layout exactly.
    pub fn from_image(
        grid: &IconGrid,
        icon_count: usize,
        icon_size: u32,
        icons_per_line: u32,
        padding: u32,
    ) -> Result<IconSet> {
        let mut icons = IconSet::blank(icon_count, icon_size)?;
        let (width, height) =
            grid_size(icon_count, icon_size, icons_per_line, padding)?;
        if grid.width() != width || grid.height() != height {
            invalid_image!(
                "Image is {}x{}, but {} icons need {}x{}",
                grid.width(),
                grid.height(),
                icon_count,
                width,
                height
            );
        }
        let cell = cell_size(icon_size, padding)?;
        for id in 0..icon_count {
            let left = (id as u32 % icons_per_line) * cell + padding;
            let top = (id as u32 / icons_per_line) * cell + padding;
            for y in 0..icon_size {
                for x in 0..icon_size {
                    if grid.pixel(left + x, top + y) == WHITE {
                        icons.set_pixel(id, x, y)?;
                    }
                }
            }
        }
        if let Some(text) = grid.names_text() {
            for (id, name) in text.split(NAME_SEPARATOR).enumerate() {
                if id < icon_count {
                    icons.rename_icon(id, name)?;
                }
            }
        }
        Ok(icons)
    }

    /// Writes the whole set as a PNG atlas with the names embedded.
    pub fn write_png<W: Write>(
        &self,
        writer: W,
        icons_per_line: u32,
        padding: u32,
    ) -> Result<()> {
        self.to_image(icons_per_line, padding)?.write_png(writer)
    }

    /// Writes a single icon as a PNG with its name embedded.
    pub fn write_icon_png<W: Write>(
        &self,
        id: usize,
        writer: W,
        padding: u32,
    ) -> Result<()> {
        let clip = self.copy_icon(id)?;
        let single = IconSet::from_parts(self.icon_size(), vec![clip.name],
                                         clip.data.clone())?;
        let mut grid = single.to_image(1, padding)?;
        if clip.name.is_empty() {
            grid.set_names_text(None);
        }
        grid.write_png_plain_text(writer)
    }

    /// Reads a PNG atlas written by `write_png`.  The icon count is taken
    /// from the embedded names when present, and otherwise from the number
    /// of grid cells.
    pub fn read_png<R: Read>(
        reader: R,
        icon_size: u32,
        icons_per_line: u32,
        padding: u32,
    ) -> Result<IconSet> {
        let grid = IconGrid::read_png(reader)?;
        let cell = cell_size(icon_size, padding)?;
        let icon_count = match grid.names_text() {
            Some(text) => text.split(NAME_SEPARATOR).count(),
            None => {
                if cell == 0 || grid.height() % cell != 0 {
                    invalid_image!(
                        "Image height {} is not a multiple of {}",
                        grid.height(),
                        cell
                    );
                }
                match icons_per_line.checked_mul(grid.height() / cell) {
                    Some(count) => count as usize,
                    None => invalid_image!(
                        "Too many icons per line ({})",
                        icons_per_line
                    ),
                }
            }
        };
        IconSet::from_image(&grid, icon_count, icon_size, icons_per_line,
                            padding)
    }
}

//===========================================================================//


//===========================================================================//
