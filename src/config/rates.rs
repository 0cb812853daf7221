use super::{Error, Rarity};
use rand::Rng;
use std::collections::BTreeMap;

pub const DEFAULT_RATES: [(Rarity, f64); 5] = [
    (Rarity::Common, 0.7992),
    (Rarity::Rare, 0.1598),
    (Rarity::Epic, 0.032),
    (Rarity::Ultra, 0.0064),
    (Rarity::Exclusive, 0.0026),
];

/// Relative weight of each rarity. Weights are normalised against their
/// total at draw time, so they need not sum to one.
#[derive(Clone, Debug)]
pub struct ProbabilityTable {
    weights: Vec<(Rarity, f64)>,
    total: f64,
}

impl ProbabilityTable {
    pub fn new(weights: impl IntoIterator<Item = (Rarity, f64)>) -> Result<Self, Error> {
        let mut table = BTreeMap::new();
        for (rarity, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::Rates(format!(
                    "weight for {rarity} must be a non-negative number, got {weight}"
                )));
            }
            if table.insert(rarity, weight).is_some() {
                return Err(Error::Rates(format!("{rarity} is listed more than once")));
            }
        }
        let total: f64 = table.values().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(Error::Rates(format!(
                "total weight must be a positive finite number, got {total}"
            )));
        }
        Ok(Self {
            weights: table.into_iter().collect(),
            total,
        })
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn rarities(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.weights.iter().map(|(rarity, _)| *rarity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rarity, f64)> + '_ {
        self.weights.iter().copied()
    }

    pub fn chance(&self, rarity: Rarity) -> f64 {
        self.weights
            .iter()
            .find(|(r, _)| *r == rarity)
            .map(|(_, weight)| weight / self.total)
            .unwrap_or(0.0)
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Rarity {
        self.select(rng.gen_range(0.0..self.total))
    }

    /// Linear scan over the table for a point `r` in `[0, total)`. Falls back
    /// to the last rarity when accumulated rounding leaves `r` past the end.
    pub fn select(&self, r: f64) -> Rarity {
        let mut upto = 0.0;
        for (rarity, weight) in &self.weights {
            if upto + weight >= r {
                return *rarity;
            }
            upto += weight;
        }
        // `new` rejects empty tables, so the fallback below is never taken.
        self.weights
            .last()
            .map(|(rarity, _)| *rarity)
            .unwrap_or(Rarity::Exclusive)
    }
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        Self {
            weights: DEFAULT_RATES.to_vec(),
            total: DEFAULT_RATES.iter().map(|(_, weight)| weight).sum(),
        }
    }
}
