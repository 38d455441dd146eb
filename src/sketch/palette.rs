use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand_seeder::Seeder;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8
}

impl Color {
    pub(crate) const BLACK: Color = Color::new(0, 0, 0);
    pub(crate) const WHITE: Color = Color::new(255, 255, 255);

    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("expected a color as R,G,B with each channel in 0..=255, got '{0}'")]
pub(crate) struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| ParseColorError(s.to_owned()))?;

        match channels[..] {
            [r, g, b] => Ok(Self::new(r, g, b)),
            _ => Err(ParseColorError(s.to_owned()))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum_macros::EnumString, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum PaletteKind {
    Random,
    Fixed
}

/// Source of the color handed to each pixel write
pub(crate) enum Palette {
    Fixed(Color),
    Random(StdRng)
}

impl Palette {
    pub(crate) fn new(kind: PaletteKind, color: Color, seed: Option<&str>) -> Self {
        match kind {
            PaletteKind::Fixed => Palette::Fixed(color),
            PaletteKind::Random => {
                // A seed phrase makes the colors reproducible between runs
                let prng = match seed {
                    Some(phrase) => Seeder::from(phrase).make_rng::<StdRng>(),
                    None => StdRng::from_entropy()
                };

                Palette::Random(prng)
            }
        }
    }

    pub(crate) fn next_color(&mut self) -> Color {
        match self {
            Palette::Fixed(color) => *color,
            // Channels stay below 255, each picked independently per pixel
            Palette::Random(prng) => Color::new(
                prng.gen_range(0..255),
                prng.gen_range(0..255),
                prng.gen_range(0..255)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color() {
        assert_eq!("12,34,56".parse::<Color>().unwrap(), Color::new(12, 34, 56));
        assert_eq!(" 0, 0 ,255 ".parse::<Color>().unwrap(), Color::new(0, 0, 255));

        assert!("1,2".parse::<Color>().is_err());
        assert!("1,2,3,4".parse::<Color>().is_err());
        assert!("red".parse::<Color>().is_err());
        assert!("-1,0,0".parse::<Color>().is_err());
    }

    #[test]
    fn color_display_parses_back() {
        let color = Color::new(200, 100, 0);
        assert_eq!(color.to_string(), "200,100,0");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }

    #[test]
    fn palette_kind_names() {
        assert_eq!("random".parse::<PaletteKind>().unwrap(), PaletteKind::Random);
        assert_eq!("fixed".parse::<PaletteKind>().unwrap(), PaletteKind::Fixed);
        assert_eq!(PaletteKind::Fixed.to_string(), "fixed");
    }

    #[test]
    fn fixed_palette_repeats() {
        let mut palette = Palette::new(PaletteKind::Fixed, Color::new(1, 2, 3), Some("ignored"));

        for _ in 0..10 {
            assert_eq!(palette.next_color(), Color::new(1, 2, 3));
        }
    }

    #[test]
    fn seeded_palette_is_reproducible() {
        let mut first = Palette::new(PaletteKind::Random, Color::WHITE, Some("orbit"));
        let mut second = Palette::new(PaletteKind::Random, Color::WHITE, Some("orbit"));

        let first = (0..32).map(|_| first.next_color()).collect::<Vec<Color>>();
        let second = (0..32).map(|_| second.next_color()).collect::<Vec<Color>>();

        assert_eq!(first, second);
        assert!(first.iter().all(|c| c.r < 255 && c.g < 255 && c.b < 255));
    }
}
