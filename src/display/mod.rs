use crate::catalog::CatalogEntry;
use crate::config::Palette;
use crossterm::style::Stylize;
use std::fmt::{self, Display};

mod icon;

pub use icon::Icon;

pub const NO_DROP: &str = "No drop this time.";

/// Text shown for a drop: the skin and weapon, then its rarity.
pub fn label(entry: &CatalogEntry) -> String {
    format!(
        "{} ({})\nRarity: {}",
        entry.name,
        entry.weapon,
        entry.rarity.capitalized()
    )
}

/// One-line form for batch opens and the history listing.
pub fn summary(entry: Option<&CatalogEntry>, palette: &Palette) -> String {
    match entry {
        Some(entry) => format!("{} ({}) - {}", entry.name, entry.weapon, entry.rarity.capitalized())
            .with(palette.color(entry.rarity).into())
            .to_string(),
        None => "No drop".to_owned(),
    }
}

/// The result of opening one lootbox, ready to print.
pub struct Message {
    text: String,
    color: Option<crossterm::style::Color>,
    icon: Option<Icon>,
}

impl Message {
    pub fn new(entry: Option<&CatalogEntry>, palette: &Palette, icon: Option<Icon>) -> Self {
        match entry {
            Some(entry) => Self {
                text: label(entry),
                color: Some(palette.color(entry.rarity).into()),
                icon,
            },
            None => Self {
                text: NO_DROP.to_owned(),
                color: None,
                icon: None,
            },
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(icon) = &self.icon {
            write!(f, "{icon}")?;
        }
        for line in self.text.lines() {
            match self.color {
                Some(color) => writeln!(f, "{}", line.with(color).bold())?,
                None => writeln!(f, "{line}")?,
            }
        }
        Ok(())
    }
}
