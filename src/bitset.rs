//! Bit-level packing of square 1-bit icons into 32-bit words.
//!
//! Pixels are packed row by row: pixel `(x, y)` of an icon with side `size`
//! is linear pixel `p = y * size + x`, stored in bit `p % 32` of the icon's
//! word `p / 32`.  For 16x16 icons each word therefore holds two consecutive
//! rows, with the upper row in the low half-word.

use crate::error::{IconError, Result};

//===========================================================================//

const BITS_PER_WORD: u32 = 32;

//===========================================================================//

/// Returns the number of 32-bit words needed to store one icon of the given
/// side length.  Fails with `InvalidSize` unless `icon_size` is a nonzero
/// multiple of 8.
pub fn words_per_icon(icon_size: u32) -> Result<usize> {
    if icon_size == 0 || icon_size % 8 != 0 {
        return Err(IconError::InvalidSize(icon_size));
    }
    let num_pixels = (icon_size as usize) * (icon_size as usize);
    debug_assert_eq!(num_pixels % BITS_PER_WORD as usize, 0);
    Ok(num_pixels / BITS_PER_WORD as usize)
}

/// Returns the `(word index, bit index)` that stores pixel `(x, y)` of icon
/// `icon_id`, after bounds-checking every coordinate.
pub fn locate(
    words: &[u32],
    icon_size: u32,
    icon_id: usize,
    x: u32,
    y: u32,
) -> Result<(usize, u32)> {
    let per_icon = words_per_icon(icon_size)?;
    let icon_count = words.len() / per_icon;
    if icon_id >= icon_count {
        out_of_range!("icon id", icon_id, icon_count);
    }
    if x >= icon_size {
        out_of_range!("pixel x", x, icon_size);
    }
    if y >= icon_size {
        out_of_range!("pixel y", y, icon_size);
    }
    let pixel = y * icon_size + x;
    let word = icon_id * per_icon + (pixel / BITS_PER_WORD) as usize;
    Ok((word, pixel % BITS_PER_WORD))
}

/// Sets pixel `(x, y)` of icon `icon_id` to 1.
pub fn set_pixel(
    words: &mut [u32],
    icon_size: u32,
    icon_id: usize,
    x: u32,
    y: u32,
) -> Result<()> {
    let (word, bit) = locate(words, icon_size, icon_id, x, y)?;
    words[word] |= 1 << bit;
    Ok(())
}

/// Sets pixel `(x, y)` of icon `icon_id` to 0.
pub fn clear_pixel(
    words: &mut [u32],
    icon_size: u32,
    icon_id: usize,
    x: u32,
    y: u32,
) -> Result<()> {
    let (word, bit) = locate(words, icon_size, icon_id, x, y)?;
    words[word] &= !(1 << bit);
    Ok(())
}

/// Returns true if pixel `(x, y)` of icon `icon_id` is set.
pub fn get_pixel(
    words: &[u32],
    icon_size: u32,
    icon_id: usize,
    x: u32,
    y: u32,
) -> Result<bool> {
    let (word, bit) = locate(words, icon_size, icon_id, x, y)?;
    Ok((words[word] >> bit) & 0x1 == 1)
}

/// Flips pixel `(x, y)` of icon `icon_id` and returns its new value.
pub fn toggle_pixel(
    words: &mut [u32],
    icon_size: u32,
    icon_id: usize,
    x: u32,
    y: u32,
) -> Result<bool> {
    let (word, bit) = locate(words, icon_size, icon_id, x, y)?;
    words[word] ^= 1 << bit;
    Ok((words[word] >> bit) & 0x1 == 1)
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{
        clear_pixel, get_pixel, locate, set_pixel, toggle_pixel,
        words_per_icon,
    };
    use crate::error::IconError;

    #[test]
    fn words_per_icon_for_valid_sizes() {
        assert_eq!(words_per_icon(8).unwrap(), 2);
        assert_eq!(words_per_icon(16).unwrap(), 8);
        assert_eq!(words_per_icon(24).unwrap(), 18);
        assert_eq!(words_per_icon(32).unwrap(), 32);
        assert_eq!(words_per_icon(64).unwrap(), 128);
    }

    #[test]
    fn words_per_icon_rejects_bad_sizes() {
        for &size in &[0, 4, 12, 17, 30] {
            match words_per_icon(size) {
                Err(IconError::InvalidSize(s)) => assert_eq!(s, size),
                other => panic!("size {} gave {:?}", size, other),
            }
        }
    }

    #[test]
    fn sixteen_pixel_layout_packs_two_rows_per_word() {
        let words = vec![0u32; 8 * 3];
        assert_eq!(locate(&words, 16, 0, 0, 0).unwrap(), (0, 0));
        assert_eq!(locate(&words, 16, 0, 15, 0).unwrap(), (0, 15));
        assert_eq!(locate(&words, 16, 0, 0, 1).unwrap(), (0, 16));
        assert_eq!(locate(&words, 16, 0, 15, 1).unwrap(), (0, 31));
        assert_eq!(locate(&words, 16, 0, 0, 2).unwrap(), (1, 0));
        assert_eq!(locate(&words, 16, 2, 15, 15).unwrap(), (23, 31));
    }

    #[test]
    fn every_pixel_maps_to_a_distinct_bit() {
        for &size in &[8u32, 16, 32, 64] {
            let per_icon = words_per_icon(size).unwrap();
            let words = vec![0u32; per_icon];
            let mut seen = vec![false; per_icon * 32];
            for y in 0..size {
                for x in 0..size {
                    let (word, bit) = locate(&words, size, 0, x, y).unwrap();
                    let slot = word * 32 + bit as usize;
                    assert!(!seen[slot], "({}, {}) collides", x, y);
                    seen[slot] = true;
                }
            }
            assert!(seen.iter().all(|&hit| hit));
        }
    }

    #[test]
    fn set_and_clear_do_not_bleed() {
        let mut words = vec![0u32; 8 * 4];
        set_pixel(&mut words, 16, 1, 7, 9).unwrap();
        for id in 0..4 {
            for y in 0..16 {
                for x in 0..16 {
                    let expected = id == 1 && x == 7 && y == 9;
                    assert_eq!(
                        get_pixel(&words, 16, id, x, y).unwrap(),
                        expected
                    );
                }
            }
        }
        clear_pixel(&mut words, 16, 1, 7, 9).unwrap();
        assert!(words.iter().all(|&word| word == 0));
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut words = vec![0u32; 8];
        assert!(toggle_pixel(&mut words, 16, 0, 3, 3).unwrap());
        assert!(get_pixel(&words, 16, 0, 3, 3).unwrap());
        assert!(!toggle_pixel(&mut words, 16, 0, 3, 3).unwrap());
        assert_eq!(words, vec![0u32; 8]);
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut words = vec![0u32; 8 * 2];
        assert!(matches!(
            set_pixel(&mut words, 16, 0, 16, 0),
            Err(IconError::IndexOutOfRange { what: "pixel x", .. })
        ));
        assert!(matches!(
            set_pixel(&mut words, 16, 0, 0, 16),
            Err(IconError::IndexOutOfRange { what: "pixel y", .. })
        ));
        assert!(matches!(
            get_pixel(&words, 16, 2, 0, 0),
            Err(IconError::IndexOutOfRange { what: "icon id", .. })
        ));
        assert!(words.iter().all(|&word| word == 0));
    }
}

//===========================================================================//
