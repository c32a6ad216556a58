//! Word-cloud rendering.
//!
//! This module contains the following components:
//!
//! - glyphs: the built-in 5x7 bitmap font and the block drawing routine
//! - the renderer itself, turning a ranked word-frequency list into an RGBA
//!   canvas
//!
//! Layout is deterministic. Words are placed left to right in rows starting
//! at the top-left corner, in rank order, sized on a linear scale between the
//! configured font bounds. A word that no longer fits is dropped without
//! error; the same input always produces the same pixels.

mod glyphs;

use image::{Rgba, RgbaImage};
use serde::Deserialize;

use crate::stats::types::WordCount;

/// Default canvas width in pixels.
const DEFAULT_WIDTH: u32 = 500;
/// Default canvas height in pixels.
const DEFAULT_HEIGHT: u32 = 500;
/// Default smallest font height in pixels.
const DEFAULT_MIN_FONT_SIZE: u32 = 10;
/// Default largest font height in pixels.
const DEFAULT_MAX_FONT_SIZE: u32 = 72;
/// Default cap on the number of words drawn.
const DEFAULT_MAX_WORDS: usize = 60;

/// Blank border kept around the canvas edge, in pixels.
const MARGIN: u32 = 10;
/// Vertical gap between rows, in pixels.
const ROW_PADDING: u32 = 4;
/// Horizontal gap between words in a row, in pixels.
const WORD_PADDING: u32 = 6;

/// Rendering parameters for the word-cloud canvas.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WordcloudConfig {
    pub width: u32,
    pub height: u32,
    pub min_font_size: u32,
    pub max_font_size: u32,
    pub max_words: usize,
}

impl Default for WordcloudConfig {
    fn default() -> Self {
        WordcloudConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

/// Render the frequency list onto a fresh white canvas.
///
/// # Parameters
///
/// * `frequencies` - word counts in rank order, most frequent first
/// * `config` - canvas dimensions, font bounds, and the word cap
///
/// # Returns
///
/// The finished image. An empty frequency list yields a blank canvas.
pub fn render(frequencies: &[WordCount], config: &WordcloudConfig) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(config.width, config.height, Rgba([255, 255, 255, 255]));

    let visible = &frequencies[..frequencies.len().min(config.max_words)];
    if visible.is_empty() {
        return image;
    }

    let max_count = visible.iter().map(|entry| entry.count).max().unwrap_or(0);
    let min_count = visible.iter().map(|entry| entry.count).min().unwrap_or(0);

    let mut x = MARGIN;
    let mut y = MARGIN;
    let mut row_height = 0;

    for (rank, entry) in visible.iter().enumerate() {
        let scale = font_scale(entry.count, min_count, max_count, config);
        let width = glyphs::word_width(&entry.word, scale);
        let height = glyphs::word_height(scale);

        if width + 2 * MARGIN > config.width {
            // Too wide for any row at its size; skip it and keep going.
            continue;
        }
        if x + width + MARGIN > config.width {
            x = MARGIN;
            y += row_height + ROW_PADDING;
            row_height = 0;
        }
        if y + height + MARGIN > config.height {
            // Out of vertical space; everything below this rank is dropped.
            break;
        }

        glyphs::draw_word(&mut image, x, y, &entry.word, scale, palette_color(rank));
        x += width + WORD_PADDING;
        row_height = row_height.max(height);
    }

    image
}

/// Glyph scale for a count, interpolated linearly between the configured
/// font bounds. A uniform list gets the largest size for every word.
fn font_scale(count: usize, min_count: usize, max_count: usize, config: &WordcloudConfig) -> u32 {
    let min_scale = (config.min_font_size / glyphs::GLYPH_HEIGHT).max(1);
    let max_scale = (config.max_font_size / glyphs::GLYPH_HEIGHT).max(min_scale);

    if max_count == min_count {
        return max_scale;
    }

    let ratio = (count - min_count) as f64 / (max_count - min_count) as f64;
    min_scale + (ratio * (max_scale - min_scale) as f64).round() as u32
}

fn palette_color(rank: usize) -> Rgba<u8> {
    match rank % 8 {
        0 => Rgba([31, 119, 180, 255]),  // Steel blue
        1 => Rgba([214, 39, 40, 255]),   // Brick red
        2 => Rgba([44, 160, 44, 255]),   // Forest green
        3 => Rgba([255, 127, 14, 255]),  // Orange
        4 => Rgba([148, 103, 189, 255]), // Purple
        5 => Rgba([140, 86, 75, 255]),   // Brown
        6 => Rgba([23, 190, 207, 255]),  // Teal
        _ => Rgba([227, 119, 194, 255]), // Pink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, usize)]) -> Vec<WordCount> {
        entries
            .iter()
            .map(|(word, count)| WordCount {
                word: (*word).to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_render_matches_configured_dimensions() {
        let image = render(&counts(&[("hello", 3), ("world", 1)]), &WordcloudConfig::default());

        assert_eq!(image.width(), 500);
        assert_eq!(image.height(), 500);
    }

    #[test]
    fn test_render_is_deterministic() {
        let frequencies = counts(&[("alpha", 5), ("beta", 3), ("gamma", 3), ("delta", 1)]);
        let config = WordcloudConfig::default();

        let first = render(&frequencies, &config);
        let second = render(&frequencies, &config);

        assert_eq!(first.into_raw(), second.into_raw());
    }

    #[test]
    fn test_render_empty_input_is_blank() {
        let image = render(&[], &WordcloudConfig::default());

        assert!(image.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_render_draws_something_for_nonempty_input() {
        let image = render(&counts(&[("hey", 2)]), &WordcloudConfig::default());

        assert!(image.pixels().any(|p| *p != Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_render_caps_word_count_without_panic() {
        let many: Vec<WordCount> = (0..200)
            .map(|i| WordCount {
                word: format!("word{}", i),
                count: 200 - i,
            })
            .collect();
        let config = WordcloudConfig {
            width: 120,
            height: 80,
            max_words: 50,
            ..WordcloudConfig::default()
        };

        let image = render(&many, &config);

        assert_eq!(image.width(), 120);
        assert_eq!(image.height(), 80);
    }
}
