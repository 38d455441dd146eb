use clap::Parser;

use crate::sketch::palette::{Color, PaletteKind};

/// Command line overrides for [`Config`]
#[derive(Parser, Debug)]
#[command(name = "bresline", about = "Click twice to draw a line between the two points")]
pub(crate) struct Arguments {
    /// Color every pixel at random or use a single color
    #[arg(long, default_value_t = PaletteKind::Random)]
    palette: PaletteKind,

    /// Line color as R,G,B when the palette is fixed
    #[arg(long, default_value_t = Color::WHITE)]
    color: Color,

    /// Seed phrase for a reproducible random palette
    #[arg(long)]
    seed: Option<String>,

    /// Canvas background as R,G,B
    #[arg(long, default_value_t = Color::BLACK)]
    background: Color
}

#[derive(Clone, Debug)]
pub(crate) struct Config {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) palette: PaletteKind,
    pub(crate) color: Color,
    pub(crate) seed: Option<String>,
    pub(crate) background: Color
}

impl Config {
    pub(crate) const WIDTH: u32 = 512;
    pub(crate) const HEIGHT: u32 = 512;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::from("bresline"),
            width: Self::WIDTH,
            height: Self::HEIGHT,
            palette: PaletteKind::Random,
            color: Color::WHITE,
            seed: None,
            background: Color::BLACK
        }
    }
}

impl From<Arguments> for Config {
    fn from(args: Arguments) -> Self {
        Self {
            palette: args.palette,
            color: args.color,
            seed: args.seed,
            background: args.background,
            ..Self::default()
        }
    }
}
