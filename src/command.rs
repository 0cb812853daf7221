use crate::error::CustomError;
use std::str::FromStr;

const MAX_BATCH: usize = 10_000;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Open(usize),
    History,
    Stats,
    Rates,
    Help,
    Quit,
}

impl Command {
    pub const HELP: &'static str = "\
Commands:
    open [count]  open a lootbox, or `count` of them (Enter also opens one)
    history       show recent drops
    stats         show how many of each rarity you have opened
    rates         show drop rates and pool sizes
    help          show this message
    quit          exit";
}

impl FromStr for Command {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let command = match words.next() {
            None | Some("open" | "o") => {
                let count = match words.next() {
                    Some(count) => count
                        .parse::<usize>()
                        .ok()
                        .filter(|count| (1..=MAX_BATCH).contains(count))
                        .ok_or_else(|| {
                            CustomError(format!(
                                "Count must be between 1 and {MAX_BATCH}, got `{count}`."
                            ))
                        })?,
                    None => 1,
                };
                Self::Open(count)
            }
            Some("history" | "h") => Self::History,
            Some("stats" | "s") => Self::Stats,
            Some("rates" | "r") => Self::Rates,
            Some("help" | "?") => Self::Help,
            Some("quit" | "exit" | "q") => Self::Quit,
            Some(other) => {
                return Err(CustomError(format!(
                    "Unknown command `{other}`. Type `help` to see what is available."
                )));
            }
        };
        match words.next() {
            Some(extra) => Err(CustomError(format!("Unexpected argument `{extra}`."))),
            None => Ok(command),
        }
    }
}
