extern crate rguiicons;

use rguiicons::{IconGrid, IconSet, BLACK, WHITE};
use std::io::Cursor;

//===========================================================================//

#[test]
fn standard_atlas_dimensions() {
    let icons = IconSet::default();
    let grid = icons.to_image(16, 1).unwrap();
    assert_eq!(grid.width(), 288);
    assert_eq!(grid.height(), 288);
    let grid = icons.to_image(20, 2).unwrap();
    assert_eq!(grid.width(), 20 * 20);
    assert_eq!(grid.height(), 20 * 13);
    let grid = IconSet::blank(5, 32).unwrap().to_image(2, 0).unwrap();
    assert_eq!((grid.width(), grid.height()), (64, 96));
}

#[test]
fn png_atlas_round_trip() {
    let mut icons = IconSet::default();
    icons.set_pixel(0, 0, 0).unwrap();
    icons.set_pixel(17, 8, 3).unwrap();
    icons.set_icon_data(255, &[u32::MAX; 8]).unwrap();
    icons.rename_icon(0, "NONE").unwrap();
    icons.rename_icon(17, "FOLDER OPEN").unwrap();
    let mut png = Vec::new();
    icons.write_png(&mut png, 16, 1).unwrap();

    let grid = IconGrid::read_png(Cursor::new(&png)).unwrap();
    assert_eq!((grid.width(), grid.height()), (288, 288));
    assert_eq!(grid.names_text(), Some(icons.names_text().as_str()));
    assert_eq!(grid.pixel(0, 0), BLACK);
    assert_eq!(grid.pixel(1, 1), WHITE);

    let back = IconSet::read_png(Cursor::new(&png), 16, 16, 1).unwrap();
    assert_eq!(back, icons);
}

#[test]
fn png_atlas_round_trip_with_separator_in_name() {
    let mut icons = IconSet::default();
    icons.set_pixel(3, 1, 1).unwrap();
    icons.rename_icon(3, "A;B").unwrap();
    let mut png = Vec::new();
    icons.write_png(&mut png, 16, 1).unwrap();
    let back = IconSet::read_png(Cursor::new(&png), 16, 16, 1).unwrap();
    assert_eq!(back.icon_count(), 256);
    assert_eq!(back.data(), icons.data());
    assert_eq!(back.name(3).unwrap().text(), "A_B");
    assert!(back.name(4).unwrap().is_empty());
}

fn has_chunk(png: &[u8], kind: &[u8; 4]) -> bool {
    png.windows(4).any(|window| window == kind)
}

#[test]
fn set_names_compressed_and_icon_name_plain() {
    let mut icons = IconSet::blank(1, 16).unwrap();
    icons.rename_icon(0, "ONLY").unwrap();
    let mut atlas = Vec::new();
    icons.write_png(&mut atlas, 16, 1).unwrap();
    assert!(has_chunk(&atlas, b"zTXt"));
    assert!(!has_chunk(&atlas, b"tEXt"));

    icons.rename_icon(0, "SEMI;COLON").unwrap();
    let mut single = Vec::new();
    icons.write_icon_png(0, &mut single, 0).unwrap();
    assert!(has_chunk(&single, b"tEXt"));
    assert!(!has_chunk(&single, b"zTXt"));
    let back = IconSet::read_png(Cursor::new(&single), 16, 1, 0).unwrap();
    assert_eq!(back.name(0).unwrap().text(), "SEMI_COLON");
}

#[test]
fn png_without_names_uses_cell_count() {
    let mut icons = IconSet::blank(8, 16).unwrap();
    icons.set_pixel(7, 15, 15).unwrap();
    let mut grid = icons.to_image(4, 1).unwrap();
    grid.set_names_text(None);
    let mut png = Vec::new();
    grid.write_png(&mut png).unwrap();
    let back = IconSet::read_png(Cursor::new(&png), 16, 4, 1).unwrap();
    assert_eq!(back.icon_count(), 8);
    assert_eq!(back.data(), icons.data());
    assert!(back.names().iter().all(|name| name.is_empty()));
}

#[test]
fn single_icon_png_carries_its_name() {
    let mut icons = IconSet::blank(3, 16).unwrap();
    icons.set_pixel(1, 4, 5).unwrap();
    icons.rename_icon(1, "GEAR").unwrap();
    let mut png = Vec::new();
    icons.write_icon_png(1, &mut png, 0).unwrap();
    let grid = IconGrid::read_png(Cursor::new(&png)).unwrap();
    assert_eq!((grid.width(), grid.height()), (16, 16));
    assert_eq!(grid.names_text(), Some("GEAR"));
    assert_eq!(grid.pixel(4, 5), WHITE);
    let single = IconSet::read_png(Cursor::new(&png), 16, 1, 0).unwrap();
    assert_eq!(single.get_icon_data(0).unwrap(),
               icons.get_icon_data(1).unwrap());
    assert_eq!(single.name(0).unwrap().text(), "GEAR");
    assert!(icons.write_icon_png(3, &mut Vec::new(), 0).is_err());
}

#[test]
fn header_for_standard_set() {
    let mut icons = IconSet::default();
    icons.rename_icon(0, "none").unwrap();
    icons.rename_icon(1, "folder file open").unwrap();
    icons.set_pixel(1, 0, 0).unwrap();
    let text = icons.to_source_code();
    assert!(text.contains("#define RAYGUI_ICON_MAX_ICONS         256\n"));
    assert!(text.contains("    ICON_NONE = 0,\n"));
    assert!(text.contains("    ICON_FOLDER_FILE_OPEN = 1,\n"));
    assert!(text.contains("    ICON_255 = 255,\n"));
    assert!(text.contains("// ICON_FOLDER_FILE_OPEN\n"));
    let word_lines = text
        .lines()
        .filter(|line| line.trim_start().starts_with("0x"))
        .count();
    assert_eq!(word_lines, 256);
}

#[test]
fn header_splits_large_icons_over_lines() {
    let icons = IconSet::blank(1, 32).unwrap();
    let text = icons.to_source_code();
    let word_lines: Vec<&str> = text
        .lines()
        .filter(|line| line.trim_start().starts_with("0x"))
        .collect();
    assert_eq!(word_lines.len(), 4);
    assert!(word_lines[3].ends_with("// ICON_000"));
    assert!(!word_lines[0].contains("//"));
}

#[test]
fn grid_from_raw_gray_data() {
    let grid = IconGrid::from_gray_data(3, 2, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(grid.pixel(2, 1), 5);
    assert_eq!(grid.names_text(), None);
}

//===========================================================================//
