//! The fixed drawing palette.
//!
//! Colors are addressed by spoken name, so the palette is a closed set of
//! words the recognizer can plausibly produce. Each name maps to a fixed RGB
//! triple; backends receive resolved [`Rgb`] values, never names.

use serde::{Deserialize, Serialize};

/// A resolved 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns a contrasting shade for drawing on top of this color.
    ///
    /// Simplistic on purpose: average the three channels to decide whether
    /// the color reads as light or dark, then return black or white
    /// respectively. Backends use this to outline the hidden-turtle marker.
    pub fn contrasting(self) -> Rgb {
        let average = (self.r as u16 + self.g as u16 + self.b as u16) / 3;
        if average >= 128 { Rgb::BLACK } else { Rgb::WHITE }
    }
}

/// A named color from the fixed spoken palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Pink,
    Orange,
    Lime,
    Silver,
    Gold,
    Olive,
    Beige,
    Aqua,
    Teal,
    Brown,
    Black,
    White,
}

impl PaletteColor {
    /// Every palette entry, in palette order.
    pub const ALL: [PaletteColor; 17] = [
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Yellow,
        PaletteColor::Purple,
        PaletteColor::Pink,
        PaletteColor::Orange,
        PaletteColor::Lime,
        PaletteColor::Silver,
        PaletteColor::Gold,
        PaletteColor::Olive,
        PaletteColor::Beige,
        PaletteColor::Aqua,
        PaletteColor::Teal,
        PaletteColor::Brown,
        PaletteColor::Black,
        PaletteColor::White,
    ];

    /// Looks up a spoken color word. Exact lowercase match only.
    pub fn from_token(token: &str) -> Option<Self> {
        PaletteColor::ALL
            .into_iter()
            .find(|color| color.token() == token)
    }

    /// The spoken name of this color.
    pub fn token(self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Purple => "purple",
            PaletteColor::Pink => "pink",
            PaletteColor::Orange => "orange",
            PaletteColor::Lime => "lime",
            PaletteColor::Silver => "silver",
            PaletteColor::Gold => "gold",
            PaletteColor::Olive => "olive",
            PaletteColor::Beige => "beige",
            PaletteColor::Aqua => "aqua",
            PaletteColor::Teal => "teal",
            PaletteColor::Brown => "brown",
            PaletteColor::Black => "black",
            PaletteColor::White => "white",
        }
    }

    /// The fixed RGB triple for this name.
    pub fn rgb(self) -> Rgb {
        match self {
            PaletteColor::Red => Rgb::new(255, 0, 0),
            PaletteColor::Green => Rgb::new(0, 255, 0),
            PaletteColor::Blue => Rgb::new(0, 0, 255),
            PaletteColor::Yellow => Rgb::new(255, 255, 0),
            PaletteColor::Purple => Rgb::new(128, 0, 128),
            PaletteColor::Pink => Rgb::new(255, 192, 203),
            PaletteColor::Orange => Rgb::new(255, 140, 0),
            PaletteColor::Lime => Rgb::new(0, 255, 0),
            PaletteColor::Silver => Rgb::new(192, 192, 192),
            PaletteColor::Gold => Rgb::new(255, 215, 0),
            PaletteColor::Olive => Rgb::new(128, 128, 0),
            PaletteColor::Beige => Rgb::new(245, 245, 220),
            PaletteColor::Aqua => Rgb::new(0, 255, 255),
            PaletteColor::Teal => Rgb::new(0, 128, 128),
            PaletteColor::Brown => Rgb::new(139, 69, 19),
            PaletteColor::Black => Rgb::BLACK,
            PaletteColor::White => Rgb::WHITE,
        }
    }
}
