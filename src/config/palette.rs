use super::{Error, Rarity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

const NAMED: [(&str, Color); 10] = [
    ("gray", Color::rgb(190, 190, 190)),
    ("grey", Color::rgb(190, 190, 190)),
    ("blue", Color::rgb(0, 0, 255)),
    ("purple", Color::rgb(160, 32, 240)),
    ("orange", Color::rgb(255, 165, 0)),
    ("gold", Color::rgb(255, 215, 0)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 255, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("black", Color::rgb(0, 0, 0)),
];

#[derive(Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Debug)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if let Some(hex) = name.strip_prefix('#') {
            let hex = match hex.len() {
                3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
                6 => hex.to_owned(),
                _ => return Err(Error::Color(s.to_owned())),
            };
            let value = u32::from_str_radix(&hex, 16).map_err(|_| Error::Color(s.to_owned()))?;
            return Ok(Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8));
        }
        NAMED
            .iter()
            .find(|(named, _)| *named == name)
            .map(|(_, color)| *color)
            .ok_or_else(|| Error::Color(s.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        crossterm::style::Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Display color for each rarity.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct Palette(BTreeMap<Rarity, Color>);

impl Palette {
    pub fn color(&self, rarity: Rarity) -> Color {
        self.0
            .get(&rarity)
            .copied()
            .unwrap_or(Color::rgb(0, 0, 0))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(BTreeMap::from([
            (Rarity::Common, Color::rgb(190, 190, 190)),
            (Rarity::Rare, Color::rgb(0, 0, 255)),
            (Rarity::Epic, Color::rgb(160, 32, 240)),
            (Rarity::Ultra, Color::rgb(255, 165, 0)),
            (Rarity::Exclusive, Color::rgb(255, 215, 0)),
        ]))
    }
}
