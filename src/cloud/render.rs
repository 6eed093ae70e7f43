//! Word-cloud rasterization
//!
//! Draws the most frequent words onto an image. Font size scales with the
//! square root of relative frequency between the configured bounds; when a
//! word cannot be placed at its desired size it shrinks stepwise and is
//! dropped once it falls below the minimum.

use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::debug;

use crate::cloud::layout::OccupancyGrid;

/// Font size reduction per failed placement round.
const FONT_STEP: f32 = 4.0;

/// Gap kept around each placed word, in pixels.
const WORD_PADDING: u32 = 2;

/// Starting font size for a word, scaled by the square root of its relative
/// frequency. The ceiling is floored at `min_font` so tiny images (where the
/// derived maximum drops below the minimum) and inverted CLI bounds stay
/// well-formed instead of panicking in `clamp`.
fn scaled_font_size(relative: f32, min_font: f32, max_font: f32) -> f32 {
    let max_font = max_font.max(min_font);
    (max_font * relative.sqrt()).clamp(min_font, max_font)
}

/// Rendering configuration.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    pub width: u32,
    pub height: u32,
    pub min_font_size: u32,
    /// Derived from the image height when not set.
    pub max_font_size: Option<u32>,
    pub seed: u64,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            min_font_size: 8,
            max_font_size: None,
            seed: 42,
            background: Rgb([255, 255, 255]),
            foreground: Rgb([0, 0, 0]),
        }
    }
}

/// A placed word, reported for inspection and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub font_size: f32,
    pub x: u32,
    pub y: u32,
}

/// Renders word frequencies into images.
pub struct WordCloudRenderer {
    config: CloudConfig,
    font: FontVec,
    mask: Option<GrayImage>,
}

impl WordCloudRenderer {
    /// Create a renderer from raw TTF/OTF bytes.
    pub fn new(config: CloudConfig, font_bytes: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(font_bytes)
            .map_err(|_| anyhow::anyhow!("Font data is not a valid TTF/OTF font"))?;
        Ok(Self {
            config,
            font,
            mask: None,
        })
    }

    /// Restrict placement with a mask image; near-white regions are
    /// excluded. The mask is resized to the output dimensions.
    pub fn with_mask(mut self, mask: DynamicImage) -> Self {
        let resized = image::imageops::resize(
            &mask.to_luma8(),
            self.config.width,
            self.config.height,
            FilterType::Nearest,
        );
        self.mask = Some(resized);
        self
    }

    /// Lay out and draw the given frequencies, most frequent first.
    ///
    /// Returns the image and the words that found a spot.
    pub fn generate(&self, frequencies: &[(String, usize)]) -> (RgbImage, Vec<PlacedWord>) {
        let mut image = RgbImage::from_pixel(
            self.config.width,
            self.config.height,
            self.config.background,
        );

        let mut grid = OccupancyGrid::new(self.config.width, self.config.height);
        if let Some(mask) = &self.mask {
            grid.apply_mask(mask);
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut placed = Vec::new();

        let Some(&(_, max_count)) = frequencies.first() else {
            return (image, placed);
        };

        let max_font = self
            .config
            .max_font_size
            .unwrap_or(self.config.height * 9 / 10) as f32;
        let min_font = self.config.min_font_size as f32;

        for (word, count) in frequencies {
            let relative = *count as f32 / max_count as f32;
            let mut size = scaled_font_size(relative, min_font, max_font);

            loop {
                let scale = PxScale::from(size);
                let (text_w, text_h) = text_size(scale, &self.font, word);
                let box_w = text_w + 2 * WORD_PADDING;
                let box_h = text_h + 2 * WORD_PADDING;

                if let Some((x, y)) = grid.find_spot(box_w, box_h, &mut rng) {
                    draw_text_mut(
                        &mut image,
                        self.config.foreground,
                        (x + WORD_PADDING) as i32,
                        (y + WORD_PADDING) as i32,
                        scale,
                        &self.font,
                        word,
                    );
                    grid.mark(x, y, box_w, box_h);
                    placed.push(PlacedWord {
                        word: word.clone(),
                        font_size: size,
                        x,
                        y,
                    });
                    break;
                }

                size -= FONT_STEP;
                if size < min_font {
                    debug!(word = %word, "no room left, dropping word");
                    break;
                }
            }
        }

        (image, placed)
    }

    /// Render frequencies and write the image as PNG.
    pub fn render_to_file(
        &self,
        frequencies: &[(String, usize)],
        path: &Path,
    ) -> Result<Vec<PlacedWord>> {
        let (image, placed) = self.generate(frequencies);
        image
            .save(path)
            .with_context(|| format!("Failed to write image: {:?}", path))?;
        Ok(placed)
    }
}
