use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
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
// Color mapping: product name → Color32
// ---------------------------------------------------------------------------

/// Maps each product in the dataset to a distinct colour for the bar chart
/// and the sidebar swatches.
#[derive(Debug, Clone, Default)]
pub struct ProductColors {
    mapping: BTreeMap<String, Color32>,
}

impl ProductColors {
    /// Build a colour map from the dataset's sorted product list.
    pub fn new(products: &[String]) -> Self {
        let palette = generate_palette(products.len());
        let mapping = products
            .iter()
            .cloned()
            .zip(palette)
            .collect();
        ProductColors { mapping }
    }

    /// Look up the colour for a product.
    pub fn color_for(&self, product: &str) -> Color32 {
        self.mapping.get(product).copied().unwrap_or(Color32::GRAY)
    }
}
