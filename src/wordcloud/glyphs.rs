//! Fixed 5x7 bitmap glyphs for the word-cloud renderer.
//!
//! Words are drawn from a small hash-mark font so the renderer needs no font
//! file at runtime. Every pattern is exactly five columns wide and seven rows
//! tall; characters without a pattern occupy a blank cell of the same size,
//! which keeps measured and drawn widths in agreement.

use image::{Rgba, RgbaImage};

/// Pattern height in rows.
pub(crate) const GLYPH_HEIGHT: u32 = 7;
/// Pattern width in columns.
pub(crate) const GLYPH_WIDTH: u32 = 5;
/// Blank columns between adjacent glyph cells.
pub(crate) const GLYPH_SPACING: u32 = 1;

/// Pixel width of a word drawn at the given scale.
pub(crate) fn word_width(word: &str, scale: u32) -> u32 {
    let cells = word.chars().count() as u32;
    if cells == 0 {
        return 0;
    }
    (cells * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING) * scale
}

/// Pixel height of a word drawn at the given scale.
pub(crate) fn word_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

/// Draw one word with its top-left corner at (x, y), each pattern cell
/// filling a scale-by-scale pixel block. Pixels past the canvas edge are
/// dropped.
pub(crate) fn draw_word(image: &mut RgbaImage, x: u32, y: u32, word: &str, scale: u32, color: Rgba<u8>) {
    let mut cursor = x;
    for ch in word.chars() {
        if let Some(pattern) = glyph(ch.to_ascii_uppercase()) {
            for (row_index, row) in pattern.iter().enumerate() {
                for (col_index, cell) in row.chars().enumerate() {
                    if cell == ' ' {
                        continue;
                    }
                    fill_block(image, cursor + col_index as u32 * scale, y + row_index as u32 * scale, scale, color);
                }
            }
        }
        cursor += (GLYPH_WIDTH + GLYPH_SPACING) * scale;
    }
}

fn fill_block(image: &mut RgbaImage, x: u32, y: u32, scale: u32, color: Rgba<u8>) {
    for dy in 0..scale {
        for dx in 0..scale {
            let px = x + dx;
            let py = y + dy;
            if px < image.width() && py < image.height() {
                image.put_pixel(px, py, color);
            }
        }
    }
}

/// Characters the font covers, used by the width test below.
#[cfg(test)]
const COVERED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-.,!?':/";

fn glyph(ch: char) -> Option<&'static [&'static str; 7]> {
    match ch {
        'A' => Some(&["  #  ", " # # ", "#   #", "#####", "#   #", "#   #", "#   #"]),
        'B' => Some(&["#### ", "#   #", "#   #", "#### ", "#   #", "#   #", "#### "]),
        'C' => Some(&[" ### ", "#   #", "#    ", "#    ", "#    ", "#   #", " ### "]),
        'D' => Some(&["#### ", "#   #", "#   #", "#   #", "#   #", "#   #", "#### "]),
        'E' => Some(&["#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#####"]),
        'F' => Some(&["#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#    "]),
        'G' => Some(&[" ### ", "#   #", "#    ", "#  ##", "#   #", "#   #", " ####"]),
        'H' => Some(&["#   #", "#   #", "#   #", "#####", "#   #", "#   #", "#   #"]),
        'I' => Some(&["#####", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", "#####"]),
        'J' => Some(&["  ###", "    #", "    #", "    #", "    #", "#   #", " ### "]),
        'K' => Some(&["#   #", "#  # ", "# #  ", "##   ", "# #  ", "#  # ", "#   #"]),
        'L' => Some(&["#    ", "#    ", "#    ", "#    ", "#    ", "#    ", "#####"]),
        'M' => Some(&["#   #", "## ##", "# # #", "#   #", "#   #", "#   #", "#   #"]),
        'N' => Some(&["#   #", "##  #", "# # #", "#  ##", "#   #", "#   #", "#   #"]),
        'O' => Some(&[" ### ", "#   #", "#   #", "#   #", "#   #", "#   #", " ### "]),
        'P' => Some(&["#### ", "#   #", "#   #", "#### ", "#    ", "#    ", "#    "]),
        'Q' => Some(&[" ### ", "#   #", "#   #", "#   #", "# # #", "#  # ", " ## #"]),
        'R' => Some(&["#### ", "#   #", "#   #", "#### ", "# #  ", "#  # ", "#   #"]),
        'S' => Some(&[" ####", "#    ", "#    ", " ### ", "    #", "    #", "#### "]),
        'T' => Some(&["#####", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", "  #  "]),
        'U' => Some(&["#   #", "#   #", "#   #", "#   #", "#   #", "#   #", " ### "]),
        'V' => Some(&["#   #", "#   #", "#   #", "#   #", "#   #", " # # ", "  #  "]),
        'W' => Some(&["#   #", "#   #", "#   #", "# # #", "# # #", "# # #", " # # "]),
        'X' => Some(&["#   #", "#   #", " # # ", "  #  ", " # # ", "#   #", "#   #"]),
        'Y' => Some(&["#   #", "#   #", " # # ", "  #  ", "  #  ", "  #  ", "  #  "]),
        'Z' => Some(&["#####", "    #", "   # ", "  #  ", " #   ", "#    ", "#####"]),
        '0' => Some(&[" ### ", "#   #", "#  ##", "# # #", "##  #", "#   #", " ### "]),
        '1' => Some(&["  #  ", " ##  ", "  #  ", "  #  ", "  #  ", "  #  ", " ### "]),
        '2' => Some(&[" ### ", "#   #", "    #", "  ## ", " #   ", "#    ", "#####"]),
        '3' => Some(&["#####", "    #", "   # ", "  ## ", "    #", "#   #", " ### "]),
        '4' => Some(&["   # ", "  ## ", " # # ", "#  # ", "#####", "   # ", "   # "]),
        '5' => Some(&["#####", "#    ", "#### ", "    #", "    #", "#   #", " ### "]),
        '6' => Some(&["  ## ", " #   ", "#    ", "#### ", "#   #", "#   #", " ### "]),
        '7' => Some(&["#####", "    #", "   # ", "  #  ", "  #  ", "  #  ", "  #  "]),
        '8' => Some(&[" ### ", "#   #", "#   #", " ### ", "#   #", "#   #", " ### "]),
        '9' => Some(&[" ### ", "#   #", "#   #", " ####", "    #", "   # ", " ##  "]),
        '-' => Some(&["     ", "     ", "     ", "#####", "     ", "     ", "     "]),
        '.' => Some(&["     ", "     ", "     ", "     ", "     ", " ##  ", " ##  "]),
        ',' => Some(&["     ", "     ", "     ", "     ", "  ## ", "   # ", "  #  "]),
        '!' => Some(&["  #  ", "  #  ", "  #  ", "  #  ", "  #  ", "     ", "  #  "]),
        '?' => Some(&[" ### ", "#   #", "    #", "   # ", "  #  ", "     ", "  #  "]),
        '\'' => Some(&["  #  ", "  #  ", "     ", "     ", "     ", "     ", "     "]),
        ':' => Some(&["     ", " ##  ", " ##  ", "     ", " ##  ", " ##  ", "     "]),
        '/' => Some(&["    #", "    #", "   # ", "  #  ", " #   ", "#    ", "#    "]),
        _ => None,
    }
}
