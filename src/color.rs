use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

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
            // offset keeps the first hue off pure red
            let hue = (210.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
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
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Maps each species to a distinct colour, shared by every panel so the
/// legends agree. Entries keep the order they were assigned in.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: Vec<(Species, Color32)>,
    default_color: Color32,
}

impl ColorMap {
    /// Assign colours to `species` in the given order.
    pub fn new(species: &[Species]) -> Self {
        let palette = generate_palette(species.len());
        let mapping = species.iter().copied().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (species label → colour) in assignment order.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(s, c)| (s.to_string(), *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
        assert_ne!(palette[0], palette[2]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_species_falls_back_to_grey() {
        let map = ColorMap::new(&[Species::Setosa, Species::Virginica]);
        assert_ne!(map.color_for(Species::Setosa), Color32::GRAY);
        assert_eq!(map.color_for(Species::Versicolor), Color32::GRAY);
        let labels: Vec<String> = map.legend_entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["setosa", "virginica"]);
    }

    #[test]
    fn legend_keeps_first_seen_order() {
        let order = [Species::Virginica, Species::Setosa, Species::Versicolor];
        let map = ColorMap::new(&order);
        let labels: Vec<String> = map.legend_entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["virginica", "setosa", "versicolor"]);

        let palette = generate_palette(order.len());
        for (species, colour) in order.into_iter().zip(palette) {
            assert_eq!(map.color_for(species), colour);
        }
    }
}
