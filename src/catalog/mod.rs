use crate::config::Rarity;
use std::collections::HashMap;

mod error;
mod pool;

pub use error::Error;
pub use pool::Pool;

#[derive(Clone, Debug)]
pub struct TierRecord {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct WeaponRecord {
    pub name: String,
    pub skins: Vec<SkinRecord>,
}

#[derive(Clone, Debug)]
pub struct SkinRecord {
    pub name: String,
    pub weapon: String,
    pub tier: Option<String>,
    pub icon: Option<String>,
}

/// A drawable skin, joined with the rarity its tier classifies to.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CatalogEntry {
    pub name: String,
    pub weapon: String,
    pub rarity: Rarity,
    pub icon: Option<String>,
}

/// Maps tier ids to rarities. Tiers whose names match no keyword are left out.
pub fn classify_tiers(tiers: &[TierRecord]) -> HashMap<&str, Rarity> {
    tiers
        .iter()
        .filter_map(|tier| match Rarity::classify(&tier.name) {
            Some(rarity) => Some((tier.id.as_str(), rarity)),
            None => {
                log::debug!("Tier {} ({}) matches no rarity", tier.name, tier.id);
                None
            }
        })
        .collect()
}
