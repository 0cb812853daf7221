mod error;
mod palette;
mod rarity;
mod rates;
mod settings;

pub use error::Error;
pub use palette::{Color, Palette};
pub use rarity::Rarity;
pub use rates::ProbabilityTable;
pub use settings::Settings;
