use crate::catalog::{CatalogEntry, Pool};
use crate::config::ProbabilityTable;
use crate::history::History;
use rand::Rng;
use std::fmt::Display;

/// An opening session over a fixed pool and drop table.
pub struct Lootbox {
    pool: Pool,
    rates: ProbabilityTable,
    history: History,
}

impl Lootbox {
    pub fn new(pool: Pool, rates: ProbabilityTable, history: History) -> Self {
        Self {
            pool,
            rates,
            history,
        }
    }

    pub fn open<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<CatalogEntry> {
        let drop = self.pool.draw(&self.rates, rng).cloned();
        match &drop {
            Some(entry) => {
                log::debug!("Opened {} ({}), {}", entry.name, entry.weapon, entry.rarity)
            }
            None => log::debug!("Opened nothing"),
        }
        self.history.record(drop.as_ref());
        drop
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn distribution(&self) -> impl Display + '_ {
        self.pool.distribution(&self.rates)
    }
}
