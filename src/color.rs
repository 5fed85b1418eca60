use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use spectrum_broadener::pipeline::Series;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at `hue_offset` degrees.
pub fn generate_palette(n: usize, hue_offset: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (hue_offset + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per output curve, stable across redraws.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    colors: Vec<Color32>,
}

impl Default for SeriesColors {
    fn default() -> Self {
        // 220° puts the original curve in the blue range.
        Self {
            colors: generate_palette(Series::ALL.len(), 220.0),
        }
    }
}

impl SeriesColors {
    pub fn color_for(&self, series: Series) -> Color32 {
        Series::ALL
            .iter()
            .position(|s| *s == series)
            .and_then(|i| self.colors.get(i).copied())
            .unwrap_or(Color32::GRAY)
    }
}
