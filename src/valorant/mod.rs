use crate::catalog::{self, SkinRecord, TierRecord, WeaponRecord};
use serde::Deserialize;

mod client;
mod error;

pub use client::Client;
pub use error::Error;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub uuid: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub skins: Vec<Skin>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    pub uuid: String,
    pub display_name: Option<String>,
    pub content_tier_uuid: Option<String>,
    pub display_icon: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContentTier {
    pub uuid: String,
    pub display_name: Option<String>,
}

impl TryFrom<ContentTier> for TierRecord {
    type Error = catalog::Error;

    fn try_from(tier: ContentTier) -> Result<Self, Self::Error> {
        let name = tier.display_name.ok_or_else(|| catalog::Error::MalformedInput {
            record: "content tier",
            id: tier.uuid.clone(),
            field: "displayName",
        })?;
        Ok(Self { id: tier.uuid, name })
    }
}

impl TryFrom<Weapon> for WeaponRecord {
    type Error = catalog::Error;

    fn try_from(weapon: Weapon) -> Result<Self, Self::Error> {
        let name = weapon.display_name.ok_or_else(|| catalog::Error::MalformedInput {
            record: "weapon",
            id: weapon.uuid.clone(),
            field: "displayName",
        })?;
        let skins = weapon
            .skins
            .into_iter()
            .map(|skin| -> Result<SkinRecord, catalog::Error> {
                Ok(SkinRecord {
                    name: skin.display_name.ok_or_else(|| catalog::Error::MalformedInput {
                        record: "skin",
                        id: skin.uuid.clone(),
                        field: "displayName",
                    })?,
                    weapon: name.clone(),
                    tier: skin.content_tier_uuid.filter(|tier| !tier.is_empty()),
                    icon: skin.display_icon.filter(|icon| !icon.is_empty()),
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { name, skins })
    }
}
