//! Weighted fill selection for reconstructed cells.
//!
//! A palette is an ordered list of named entries with positive weights; one
//! entry may carry no fill at all (the transparent share of the composition).
//! Selection scans cumulative brackets with a single uniform draw, so one
//! cell costs exactly one draw from the stream.
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng::rand01;

/// An opaque 8-bit RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The classic composition colors.
pub const BLUE: Rgb = Rgb::new(0x47, 0x54, 0xBD);
pub const RED: Rgb = Rgb::new(0xE4, 0x45, 0x25);
pub const YELLOW: Rgb = Rgb::new(0xF1, 0xD9, 0x3B);
pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// A named palette entry with its selection weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaletteEntry {
    pub name: String,
    pub weight: f32,
    /// `None` leaves the cell unfilled.
    pub fill: Option<Rgb>,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, weight: f32, fill: Option<Rgb>) -> Self {
        Self {
            name: name.into(),
            weight,
            fill,
        }
    }
}

/// Weighted categorical sampler over palette entries.
#[derive(Debug, Clone)]
pub struct WeightedPalette {
    entries: Vec<PaletteEntry>,
    brackets: Vec<f32>,
    total: f32,
}

impl WeightedPalette {
    /// Build a palette from ordered entries.
    ///
    /// Fails with [`Error::InvalidConfig`] when the list is empty or any
    /// weight is non-positive or non-finite.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidConfig("palette must not be empty".into()));
        }

        let mut brackets = Vec::with_capacity(entries.len());
        let mut total = 0.0f32;
        for entry in &entries {
            if !entry.weight.is_finite() || entry.weight <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "palette entry '{}' must have a positive weight",
                    entry.name
                )));
            }
            total += entry.weight;
            brackets.push(total);
        }

        Ok(Self {
            entries,
            brackets,
            total,
        })
    }

    /// The default composition palette: mostly unfilled cells with the
    /// classic primaries and an occasional black block.
    pub fn mondrian() -> Self {
        Self::new(vec![
            PaletteEntry::new("transparent", 60.0, None),
            PaletteEntry::new("blue", 16.0, Some(BLUE)),
            PaletteEntry::new("red", 13.0, Some(RED)),
            PaletteEntry::new("yellow", 13.0, Some(YELLOW)),
            PaletteEntry::new("black", 4.0, Some(BLACK)),
        ])
        .expect("default palette is valid")
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Select an entry for a uniform draw in `[0, 1)`.
    ///
    /// Returns the first entry whose cumulative bracket strictly exceeds the
    /// scaled draw; because the draw is strictly below one, the scan always
    /// selects.
    pub fn sample(&self, draw: f32) -> &PaletteEntry {
        debug_assert!((0.0..1.0).contains(&draw), "draw must be in [0, 1)");
        let scaled = draw * self.total;
        let index = self
            .brackets
            .iter()
            .position(|bracket| scaled < *bracket)
            .unwrap_or(self.entries.len() - 1);
        &self.entries[index]
    }

    /// Select an entry using the next draw from `rng`.
    pub fn sample_with(&self, rng: &mut dyn Rng) -> &PaletteEntry {
        self.sample(rand01(rng))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl rand::rand_core::TryRng for FixedRng {
        type Error = core::convert::Infallible;

        fn try_next_u32(&mut self) -> core::result::Result<u32, Self::Error> {
            Ok(self.value)
        }

        fn try_next_u64(&mut self) -> core::result::Result<u64, Self::Error> {
            Ok(self.value as u64)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), Self::Error> {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
            Ok(())
        }
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(
            WeightedPalette::new(Vec::new()),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn non_positive_weight_is_rejected() {
        let entries = vec![PaletteEntry::new("bad", 0.0, None)];
        assert!(WeightedPalette::new(entries).is_err());

        let entries = vec![PaletteEntry::new("bad", f32::NAN, None)];
        assert!(WeightedPalette::new(entries).is_err());
    }

    #[test]
    fn brackets_select_in_definition_order() {
        let palette = WeightedPalette::mondrian();

        // total = 106; draws land in transparent / blue / black brackets
        assert_eq!(palette.sample(0.0).name, "transparent");
        assert_eq!(palette.sample(0.57).name, "blue"); // 60.42 within (60, 76]
        assert_eq!(palette.sample(0.99).name, "black");
    }

    #[test]
    fn rng_draw_selects_first_and_later_entries() {
        let palette = WeightedPalette::mondrian();

        let mut rng_first = FixedRng { value: 0 };
        assert_eq!(palette.sample_with(&mut rng_first).name, "transparent");

        let mut rng_late = FixedRng {
            value: (0.98 * u32::MAX as f32) as u32,
        };
        assert_eq!(palette.sample_with(&mut rng_late).name, "black");
    }

    #[test]
    fn empirical_frequencies_match_weights() {
        let palette = WeightedPalette::mondrian();
        let mut rng = StdRng::seed_from_u64(99);

        const DRAWS: usize = 100_000;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..DRAWS {
            *counts
                .entry(palette.sample_with(&mut rng).name.as_str())
                .or_default() += 1;
        }

        // weights 60/16/13/13/4 over a total of 106
        let expected = [
            ("transparent", 60.0 / 106.0),
            ("blue", 16.0 / 106.0),
            ("red", 13.0 / 106.0),
            ("yellow", 13.0 / 106.0),
            ("black", 4.0 / 106.0),
        ];
        for (name, want) in expected {
            let freq = counts[name] as f64 / DRAWS as f64;
            assert!(
                (freq - want).abs() < 0.02,
                "{name}: observed {freq:.3}, expected {want:.3}"
            );
        }
    }
}
