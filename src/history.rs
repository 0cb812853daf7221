use crate::catalog::CatalogEntry;
use crate::config::Rarity;
use std::collections::{BTreeMap, VecDeque};
use std::fmt::{self, Display};

/// Recent drops, newest first, plus running tallies for the session.
#[derive(Debug)]
pub struct History {
    capacity: usize,
    recent: VecDeque<CatalogEntry>,
    opened: usize,
    empty: usize,
    tally: BTreeMap<Rarity, usize>,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            recent: VecDeque::new(),
            opened: 0,
            empty: 0,
            tally: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, drop: Option<&CatalogEntry>) {
        self.opened += 1;
        let Some(entry) = drop else {
            self.empty += 1;
            return;
        };
        *self.tally.entry(entry.rarity).or_default() += 1;
        if self.capacity == 0 {
            return;
        }
        self.recent.truncate(self.capacity - 1);
        self.recent.push_front(entry.clone());
    }

    pub fn recent(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.recent.iter()
    }

    pub fn opened(&self) -> usize {
        self.opened
    }

    pub fn empty(&self) -> usize {
        self.empty
    }

    pub fn count(&self, rarity: Rarity) -> usize {
        self.tally.get(&rarity).copied().unwrap_or(0)
    }

    pub fn stats(&self) -> impl Display + '_ {
        Stats(self)
    }
}

struct Stats<'a>(&'a History);

impl Display for Stats<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let history = self.0;
        writeln!(f, "Opened: {}", history.opened())?;
        writeln!(f, "No drop: {}", history.empty())?;
        for rarity in Rarity::ALL {
            writeln!(f, "\t{}: {}", rarity.capitalized(), history.count(rarity))?;
        }
        Ok(())
    }
}
