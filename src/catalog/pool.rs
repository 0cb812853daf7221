use super::{CatalogEntry, TierRecord, WeaponRecord, classify_tiers};
use crate::config::{ProbabilityTable, Rarity};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// Drawable skins partitioned by rarity.
///
/// Every rarity in the table the pool was built against has an entry, even
/// when nothing classified into it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Pool(BTreeMap<Rarity, Vec<CatalogEntry>>);

impl Pool {
    pub fn build(tiers: &[TierRecord], weapons: &[WeaponRecord], rates: &ProbabilityTable) -> Self {
        let classified = classify_tiers(tiers);
        let mut pool: BTreeMap<_, Vec<CatalogEntry>> =
            rates.rarities().map(|rarity| (rarity, vec![])).collect();

        for skin in weapons.iter().flat_map(|weapon| &weapon.skins) {
            let Some(tier) = &skin.tier else {
                log::trace!("Skipping {} ({}): no content tier", skin.name, skin.weapon);
                continue;
            };
            let Some(rarity) = classified.get(tier.as_str()).copied() else {
                log::trace!("Skipping {} ({}): unclassified tier {}", skin.name, skin.weapon, tier);
                continue;
            };
            let Some(entries) = pool.get_mut(&rarity) else {
                log::debug!(
                    "Skipping {} ({}): {} has no drop rate",
                    skin.name,
                    skin.weapon,
                    rarity
                );
                continue;
            };
            entries.push(CatalogEntry {
                name: skin.name.clone(),
                weapon: skin.weapon.clone(),
                rarity,
                icon: skin.icon.clone(),
            });
        }

        Self(pool)
    }

    pub fn entries(&self, rarity: Rarity) -> &[CatalogEntry] {
        self.0.get(&rarity).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rarities(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Picks a rarity by weight, then a skin uniformly within it. `None` when
    /// the chosen rarity has no skins.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        rates: &ProbabilityTable,
        rng: &mut R,
    ) -> Option<&CatalogEntry> {
        let rarity = rates.choose(rng);
        self.entries(rarity).choose(rng)
    }

    pub fn distribution<'a>(&'a self, rates: &'a ProbabilityTable) -> impl Display + 'a {
        Distribution(self, rates)
    }
}

struct Distribution<'a>(&'a Pool, &'a ProbabilityTable);

impl Display for Distribution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Distribution(pool, rates) = self;
        writeln!(f, "Total weight: {}", rates.total())?;
        for (rarity, weight) in rates.iter() {
            let chance = rates.chance(rarity) * 100.0;
            let skins = pool.entries(rarity).len();
            write!(
                f,
                "\t({weight}) {}: {chance:.2}% - {skins} skins",
                rarity.capitalized()
            )?;
            if skins > 0 {
                writeln!(f, ", {:.4}% each", chance / skins as f64)?;
            } else {
                writeln!(f, ", opens as no drop")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SkinRecord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tier(id: &str, name: &str) -> TierRecord {
        TierRecord {
            id: id.to_owned(),
            name: name.to_owned(),
        }
    }

    fn skin(name: &str, weapon: &str, tier: Option<&str>) -> SkinRecord {
        SkinRecord {
            name: name.to_owned(),
            weapon: weapon.to_owned(),
            tier: tier.map(str::to_owned),
            icon: None,
        }
    }

    fn entry(name: &str, weapon: &str, rarity: Rarity) -> CatalogEntry {
        CatalogEntry {
            name: name.to_owned(),
            weapon: weapon.to_owned(),
            rarity,
            icon: None,
        }
    }

    fn weapon(name: &str, skins: Vec<SkinRecord>) -> WeaponRecord {
        WeaponRecord {
            name: name.to_owned(),
            skins,
        }
    }

    fn fixture() -> (Vec<TierRecord>, Vec<WeaponRecord>) {
        let tiers = vec![
            tier("select", "Select Edition"),
            tier("deluxe", "Deluxe Edition"),
            tier("premium", "Premium Edition"),
            tier("pass", "Battlepass"),
        ];
        let weapons = vec![
            weapon(
                "Vandal",
                vec![
                    skin("Standard Vandal", "Vandal", None),
                    skin("Reaver Vandal", "Vandal", Some("premium")),
                    skin("Prism Vandal", "Vandal", Some("select")),
                ],
            ),
            weapon(
                "Phantom",
                vec![
                    skin("Oni Phantom", "Phantom", Some("deluxe")),
                    skin("Pass Phantom", "Phantom", Some("pass")),
                    skin("Ghost Phantom", "Phantom", Some("missing")),
                    skin("Sakura Phantom", "Phantom", Some("select")),
                ],
            ),
        ];
        (tiers, weapons)
    }

    fn pool(entries: Vec<(Rarity, Vec<CatalogEntry>)>) -> Pool {
        let mut map: BTreeMap<_, _> = Rarity::ALL.iter().map(|r| (*r, vec![])).collect();
        map.extend(entries);
        Pool(map)
    }

    #[test]
    fn single_premium_skin_lands_in_epic() {
        let tiers = [tier("T1", "Premium Edition")];
        let weapons = [weapon("Vandal", vec![skin("Reaver", "Vandal", Some("T1"))])];
        let pool = Pool::build(&tiers, &weapons, &ProbabilityTable::default());

        assert_eq!(pool.entries(Rarity::Epic), &[entry("Reaver", "Vandal", Rarity::Epic)]);
        for rarity in [Rarity::Common, Rarity::Rare, Rarity::Ultra, Rarity::Exclusive] {
            assert!(pool.entries(rarity).is_empty());
        }
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn every_rarity_has_an_entry_even_when_empty() {
        let pool = Pool::build(&[], &[], &ProbabilityTable::default());
        assert_eq!(pool.rarities().collect::<Vec<_>>(), Rarity::ALL.to_vec());
        assert!(pool.is_empty());
    }

    #[test]
    fn keeps_traversal_order_and_drops_unclassified_skins() {
        let (tiers, weapons) = fixture();
        let pool = Pool::build(&tiers, &weapons, &ProbabilityTable::default());

        assert_eq!(
            pool.entries(Rarity::Common),
            &[
                entry("Prism Vandal", "Vandal", Rarity::Common),
                entry("Sakura Phantom", "Phantom", Rarity::Common),
            ]
        );
        assert_eq!(pool.entries(Rarity::Rare), &[entry("Oni Phantom", "Phantom", Rarity::Rare)]);
        assert_eq!(pool.entries(Rarity::Epic), &[entry("Reaver Vandal", "Vandal", Rarity::Epic)]);
        assert_eq!(pool.len(), 4);

        let names: Vec<_> = Rarity::ALL
            .iter()
            .flat_map(|rarity| pool.entries(*rarity))
            .map(|entry| entry.name.as_str())
            .collect();
        assert!(!names.contains(&"Standard Vandal"));
        assert!(!names.contains(&"Pass Phantom"));
        assert!(!names.contains(&"Ghost Phantom"));
    }

    #[test]
    fn build_is_deterministic() {
        let (tiers, weapons) = fixture();
        let rates = ProbabilityTable::default();
        assert_eq!(
            Pool::build(&tiers, &weapons, &rates),
            Pool::build(&tiers, &weapons, &rates)
        );
    }

    #[test]
    fn icons_carry_through() {
        let tiers = [tier("T1", "Ultra Edition")];
        let mut skin = skin("Elderflame", "Operator", Some("T1"));
        skin.icon = Some("https://media.example/icon.png".to_owned());
        let weapons = [weapon("Operator", vec![skin])];
        let pool = Pool::build(&tiers, &weapons, &ProbabilityTable::default());
        assert_eq!(
            pool.entries(Rarity::Ultra)[0].icon.as_deref(),
            Some("https://media.example/icon.png")
        );
    }

    #[test]
    fn pool_keys_follow_the_rates_table() {
        let (tiers, weapons) = fixture();
        let rates = ProbabilityTable::new([(Rarity::Common, 1.0), (Rarity::Epic, 1.0)]).unwrap();
        let pool = Pool::build(&tiers, &weapons, &rates);
        assert_eq!(pool.rarities().collect::<Vec<_>>(), vec![Rarity::Common, Rarity::Epic]);
        assert!(pool.entries(Rarity::Rare).is_empty());
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn all_weight_on_common_never_draws_other_rarities() {
        let rates = ProbabilityTable::new([
            (Rarity::Common, 1.0),
            (Rarity::Rare, 0.0),
            (Rarity::Epic, 0.0),
            (Rarity::Ultra, 0.0),
            (Rarity::Exclusive, 0.0),
        ])
        .unwrap();
        let pool = pool(vec![
            (Rarity::Common, vec![entry("A", "Classic", Rarity::Common)]),
            (Rarity::Rare, vec![entry("B", "Classic", Rarity::Rare)]),
            (Rarity::Epic, vec![entry("C", "Classic", Rarity::Epic)]),
            (Rarity::Ultra, vec![entry("D", "Classic", Rarity::Ultra)]),
            (Rarity::Exclusive, vec![entry("E", "Classic", Rarity::Exclusive)]),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let drawn = pool.draw(&rates, &mut rng);
            assert!(drawn.is_none_or(|entry| entry.rarity == Rarity::Common));
        }
    }

    #[test]
    fn empty_pool_always_draws_nothing() {
        let pool = Pool::build(&[], &[], &ProbabilityTable::default());
        let rates = ProbabilityTable::new([(Rarity::Exclusive, 5.0), (Rarity::Rare, 1.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            assert_eq!(pool.draw(&ProbabilityTable::default(), &mut rng), None);
            assert_eq!(pool.draw(&rates, &mut rng), None);
        }
    }

    #[test]
    fn draw_rates_follow_rarity_weights() {
        let rates = ProbabilityTable::new([
            (Rarity::Common, 0.8),
            (Rarity::Rare, 0.16),
            (Rarity::Epic, 0.032),
            (Rarity::Ultra, 0.0064),
            (Rarity::Exclusive, 0.0026),
        ])
        .unwrap();
        let pool = pool(vec![
            (
                Rarity::Common,
                vec![entry("A", "Classic", Rarity::Common), entry("B", "Classic", Rarity::Common)],
            ),
            (Rarity::Epic, vec![entry("C", "Classic", Rarity::Epic)]),
        ]);

        let draws = 100_000;
        let mut rng = StdRng::seed_from_u64(42);
        let (mut a, mut b, mut c, mut empty) = (0, 0, 0, 0);
        for _ in 0..draws {
            match pool.draw(&rates, &mut rng).map(|entry| entry.name.as_str()) {
                Some("A") => a += 1,
                Some("B") => b += 1,
                Some("C") => c += 1,
                Some(other) => panic!("unexpected draw {other}"),
                None => empty += 1,
            }
        }

        let epic = c as f64 / draws as f64;
        let expected_epic = 0.032 / rates.total();
        assert!((epic - expected_epic).abs() < 0.003, "epic rate {epic}");

        let empty_rate = empty as f64 / draws as f64;
        let expected_empty = (0.16 + 0.0064 + 0.0026) / rates.total();
        assert!((empty_rate - expected_empty).abs() < 0.006, "empty rate {empty_rate}");

        let common = (a + b) as f64 / draws as f64;
        assert!((common - 0.8 / rates.total()).abs() < 0.006, "common rate {common}");
        let split = a as f64 / (a + b) as f64;
        assert!((split - 0.5).abs() < 0.01, "common split {split}");
    }

    #[test]
    fn distribution_lists_each_rarity() {
        let tiers = [tier("T1", "Premium Edition")];
        let weapons = [weapon("Vandal", vec![skin("Reaver", "Vandal", Some("T1"))])];
        let rates = ProbabilityTable::default();
        let pool = Pool::build(&tiers, &weapons, &rates);
        let report = pool.distribution(&rates).to_string();
        assert!(report.contains("Epic: 3.20% - 1 skins, 3.2000% each"));
        assert!(report.contains("Exclusive: 0.26% - 0 skins, opens as no drop"));
    }
}
