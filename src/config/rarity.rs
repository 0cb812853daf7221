use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Scarcity classes a skin can be drawn at.
///
/// The derived ordering is the canonical table order, common first.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Ultra,
    Exclusive,
}

/// Tier-name keywords in match priority order. The first hit wins.
const KEYWORDS: [(&str, Rarity); 6] = [
    ("select", Rarity::Common),
    ("standard", Rarity::Common),
    ("deluxe", Rarity::Rare),
    ("premium", Rarity::Epic),
    ("ultra", Rarity::Ultra),
    ("exclusive", Rarity::Exclusive),
];

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Ultra,
        Rarity::Exclusive,
    ];

    /// Derives a rarity from a content tier's display name.
    pub fn classify(tier_name: &str) -> Option<Self> {
        let name = tier_name.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map(|(_, rarity)| *rarity)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Ultra => "ultra",
            Self::Exclusive => "exclusive",
        }
    }

    pub fn capitalized(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Ultra => "Ultra",
            Self::Exclusive => "Exclusive",
        }
    }
}

impl Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}
