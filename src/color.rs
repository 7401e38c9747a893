use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
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
// Color mapping: pathway → Color32
// ---------------------------------------------------------------------------

/// Maps each pathway to its own colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Assign colours to pathways in the order given; repeats keep their
    /// first colour.
    pub fn new<'a, I>(pathways: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut keys: Vec<&String> = Vec::new();
        for key in pathways {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        let palette = generate_palette(keys.len());
        let mapping = keys
            .into_iter()
            .cloned()
            .zip(palette)
            .collect::<BTreeMap<String, Color32>>();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a pathway.
    pub fn color_for(&self, pathway: &str) -> Color32 {
        self.mapping
            .get(pathway)
            .copied()
            .unwrap_or(self.default_color)
    }
}
