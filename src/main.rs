use clap::Parser;
use moodlog::application::{init, ConfigService, EntryStore, UpdateOutcome};
use moodlog::cli::{
    format_entry_list, format_mood_catalog, format_statistics, format_streak, Cli, Commands,
};
use moodlog::domain::{dates, mood, Mood, Period};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{Config, FileStore};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Some(Commands::Init { path, locale }) => init::init(&path, locale.as_deref()),
        Some(Commands::Add { content, moods }) => {
            let (mut store, _) = open_journal()?;
            let moods = resolve_moods(&moods)?;

            match store.create(content.unwrap_or_default(), moods) {
                Some(entry) => println!("Saved entry [{}]", entry.id),
                None => {
                    println!("Nothing to save: an entry needs content or at least one mood.")
                }
            }
            Ok(())
        }
        Some(Commands::Edit { id, content, moods }) => {
            let (mut store, _) = open_journal()?;

            let Some(existing) = store.find(&id) else {
                println!("No entry with id '{}'", id);
                return Ok(());
            };

            let new_content = content.unwrap_or_else(|| existing.content.clone());
            let new_moods = match moods {
                Some(ids) => resolve_moods(&ids)?,
                None => existing.moods.clone(),
            };

            match store.update(&id, new_content, new_moods) {
                UpdateOutcome::Updated => println!("Updated entry [{}]", id),
                UpdateOutcome::NotFound => println!("No entry with id '{}'", id),
                UpdateOutcome::Rejected => {
                    println!("Nothing to update: an entry needs content or at least one mood.")
                }
            }
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let (mut store, _) = open_journal()?;

            if store.delete(&id) {
                println!("Deleted entry [{}]", id);
            } else {
                println!("No entry with id '{}' (nothing to delete)", id);
            }
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let (store, config) = open_journal()?;

            let entries = store.entries();
            let shown = match limit {
                Some(n) => &entries[..n.min(entries.len())],
                None => entries,
            };

            let output = format_entry_list(shown, dates::today(), config.display_locale());
            println!("{}", output.trim_end());
            Ok(())
        }
        Some(Commands::Streak) => {
            let (store, _) = open_journal()?;
            println!("{}", format_streak(store.streak()));
            Ok(())
        }
        Some(Commands::Stats { period }) => {
            let period =
                Period::from_str(&period).map_err(|_| MoodlogError::InvalidPeriod(period))?;

            let (store, _) = open_journal()?;
            let statistics = store.statistics(period, dates::today());
            println!("{}", format_statistics(&statistics).trim_end());
            Ok(())
        }
        Some(Commands::Moods) => {
            println!("{}", format_mood_catalog(&mood::catalog()).trim_end());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let store = FileStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("locale = {}", config.locale);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: locale, created");
                Ok(())
            }
        }
        None => {
            println!("moodlog - Personal mood journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Discover the journal root and load the entry collection and config.
fn open_journal() -> Result<(EntryStore<FileStore>, Config), MoodlogError> {
    let store = FileStore::discover()?;
    let config = Config::load_from_dir(&store.root)?;
    Ok((EntryStore::load(store), config))
}

/// Resolve catalog ids to moods; an unknown id is an argument error.
fn resolve_moods(ids: &[u32]) -> Result<Vec<Mood>, MoodlogError> {
    ids.iter()
        .map(|id| mood::find_by_id(*id).ok_or(MoodlogError::UnknownMood(*id)))
        .collect()
}
