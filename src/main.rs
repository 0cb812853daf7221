use crossterm::execute;
use crossterm::terminal::SetTitle;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};

mod api;
mod catalog;
mod command;
mod config;
mod display;
mod error;
mod history;
mod lootbox;
mod valorant;

use catalog::{CatalogEntry, Pool, TierRecord, WeaponRecord};
use command::Command;
use config::{ProbabilityTable, Settings};
use display::{Icon, Message};
use history::History;
use lootbox::Lootbox;

type Error = Box<dyn std::error::Error + Send + Sync>;

async fn load_pool(
    client: &valorant::Client,
    rates: &ProbabilityTable,
) -> Result<Pool, valorant::Error> {
    let (tiers, weapons) = tokio::try_join!(client.content_tiers(), client.weapons())?;
    log::debug!("Fetched {} tiers and {} weapons", tiers.len(), weapons.len());

    let tiers = tiers
        .into_iter()
        .map(TierRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let weapons = weapons
        .into_iter()
        .map(WeaponRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let pool = Pool::build(&tiers, &weapons, rates);
    for rarity in pool.rarities() {
        log::info!("{}: {} skins", rarity, pool.entries(rarity).len());
    }
    if pool.is_empty() {
        log::warn!("No skins matched a rarity, every lootbox will be empty");
    }
    Ok(pool)
}

async fn fetch_icon(client: &valorant::Client, entry: &CatalogEntry, width: u32) -> Option<Icon> {
    let url = entry.icon.as_deref()?;
    let bytes = match client.icon(url).await {
        Ok(bytes) => bytes,
        Err(error) => {
            log::warn!("Failed to fetch icon for {}: {}", entry.name, error);
            return None;
        }
    };
    match Icon::decode(&bytes, width) {
        Ok(icon) => {
            log::debug!("Decoded icon for {} at {}x{}", entry.name, icon.width(), icon.height());
            Some(icon)
        }
        Err(error) => {
            log::warn!("Failed to decode icon for {}: {}", entry.name, error);
            None
        }
    }
}

async fn run() -> Result<(), Error> {
    let settings = Settings::load()?;
    let rates = settings.rates()?;
    let client = valorant::Client::new(&settings.api_url, settings.language.clone())?;

    println!("Fetching data...");
    let pool = load_pool(&client, &rates).await?;
    let mut lootbox = Lootbox::new(pool, rates, History::new(settings.history));

    println!("Starting lootbox...");
    if let Err(error) = execute!(std::io::stdout(), SetTitle("Valorant Lootbox Simulator")) {
        log::debug!("Failed to set terminal title: {}", error);
    }
    println!("{}\n", Command::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("Open a lootbox! > ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                println!("{error}");
                continue;
            }
        };

        match command {
            Command::Open(1) => {
                let drop = lootbox.open(&mut rand::thread_rng());
                let icon = match &drop {
                    Some(entry) if settings.icons => {
                        fetch_icon(&client, entry, settings.icon_width).await
                    }
                    _ => None,
                };
                println!("{}", Message::new(drop.as_ref(), &settings.colors, icon));
            }
            Command::Open(count) => {
                let mut rng = rand::thread_rng();
                for _ in 0..count {
                    let drop = lootbox.open(&mut rng);
                    println!("{}", display::summary(drop.as_ref(), &settings.colors));
                }
                println!();
            }
            Command::History => {
                let mut recent = lootbox.history().recent().peekable();
                if recent.peek().is_none() {
                    println!("Nothing opened yet.");
                }
                for (i, entry) in recent.enumerate() {
                    println!("{:>3}. {}", i + 1, display::summary(Some(entry), &settings.colors));
                }
                println!();
            }
            Command::Stats => println!("{}", lootbox.history().stats()),
            Command::Rates => println!("{}", lootbox.distribution()),
            Command::Help => println!("{}\n", Command::HELP),
            Command::Quit => break,
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    if let Err(error) = run().await {
        log::error!("{}", error);
        eprintln!("{error}");
        std::process::exit(1);
    }
}
