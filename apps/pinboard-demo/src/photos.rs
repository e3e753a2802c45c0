//! Sample pins with fixed aspect ratios and captions.

use pinboard_layout::MeasurementProvider;

const CAPTION_FONT_HEIGHT: f32 = 17.0;
const CAPTION_PADDING: f32 = 4.0;
/// Average glyph advance used to estimate caption wrapping.
const GLYPH_WIDTH: f32 = 7.5;

const TITLES: &[&str] = &[
    "Harbor at dawn",
    "Rooftop garden",
    "Old tram",
    "Fog over the ridge, looking north towards the pass",
    "Lanterns",
    "Tide pools",
    "Quiet library reading room",
    "Desert road",
];

const ASPECT_RATIOS: &[f32] = &[1.5, 0.8, 1.0, 0.66, 1.33, 0.75, 1.2];

pub struct Pin {
    pub title: String,
    /// Width over height.
    pub aspect_ratio: f32,
}

pub struct SampleBoard {
    pins: Vec<Pin>,
}

impl SampleBoard {
    pub fn generate(count: usize) -> Self {
        let pins = (0..count)
            .map(|i| Pin {
                title: format!("{} #{}", TITLES[i % TITLES.len()], i),
                aspect_ratio: ASPECT_RATIOS[(i * 3) % ASPECT_RATIOS.len()],
            })
            .collect();
        Self { pins }
    }

    pub fn title(&self, index: usize) -> &str {
        &self.pins[index].title
    }
}

impl MeasurementProvider for SampleBoard {
    fn content_height(&self, index: usize, width: f32) -> f32 {
        (width / self.pins[index].aspect_ratio).round().max(0.0)
    }

    fn annotation_height(&self, index: usize, width: f32) -> f32 {
        let chars_per_line = (width / GLYPH_WIDTH).floor().max(1.0) as usize;
        let chars = self.pins[index].title.chars().count();
        let lines = chars.div_ceil(chars_per_line).max(1);
        CAPTION_PADDING + lines as f32 * CAPTION_FONT_HEIGHT + CAPTION_PADDING
    }
}
