use super::rates::DEFAULT_RATES;
use super::{Error, Palette, ProbabilityTable, Rarity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DEFAULT_PATH: &str = "lootbox.toml";

#[derive(Clone, Deserialize, Serialize, Debug)]
#[serde(default)]
pub struct Settings {
    pub api_url: String,
    pub language: Option<String>,
    pub history: usize,
    pub icons: bool,
    pub icon_width: u32,
    rates: BTreeMap<Rarity, f64>,
    pub colors: Palette,
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Reads `$LOOTBOX_CONFIG`, falling back to `lootbox.toml` when present and
    /// built-in defaults otherwise. `$VALORANT_API_URL` overrides `api_url`.
    pub fn load() -> Result<Self, Error> {
        let path = std::env::var("LOOTBOX_CONFIG")
            .ok()
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from(DEFAULT_PATH)).filter(|path| path.exists()));
        let mut settings = match path {
            Some(path) => Self::from_path(&path)?,
            None => {
                log::debug!("No configuration file found, using defaults");
                Self::default()
            }
        };
        if let Ok(url) = std::env::var("VALORANT_API_URL") {
            settings.api_url = url;
        }
        Ok(settings)
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        log::debug!("Loading configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&contents)?)
    }

    pub fn rates(&self) -> Result<ProbabilityTable, Error> {
        ProbabilityTable::new(self.rates.iter().map(|(rarity, weight)| (*rarity, *weight)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "https://valorant-api.com/v1".to_owned(),
            language: None,
            history: 20,
            icons: true,
            icon_width: 48,
            rates: DEFAULT_RATES.into_iter().collect(),
            colors: Palette::default(),
        }
    }
}
