//! Command-line interface definitions.
//!
//! Argument parsing only; the operations behind each subcommand live in
//! `ops`. Entry ids are accepted as strings so short unique prefixes can
//! be resolved against the store.

use crate::model::{DrinkType, MilkType, Mood, Temperature};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A personal drink journal for your daily cups
#[derive(Parser, Debug)]
#[command(name = "siplog", about = "A personal drink journal for your daily cups")]
#[command(author, version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log a new drink
    Add(AddArgs),
    /// List entries, newest first
    List(ListArgs),
    /// Show a single entry in full
    Show(ShowArgs),
    /// Rewrite fields of an existing entry
    Edit(EditArgs),
    /// Delete an entry
    Delete {
        /// Entry id (or unique prefix)
        id: String,
    },
    /// Delete every entry
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show derived statistics
    Stats,
    /// Export every entry as CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show or change user settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Drink category (defaults to the configured default drink)
    #[arg(long, value_enum)]
    pub drink: Option<DrinkType>,

    /// Specific drink name, e.g. "Latte"
    #[arg(long)]
    pub name: Option<String>,

    /// Where the drink was had
    #[arg(long)]
    pub location: Option<String>,

    /// Log the drink as iced instead of hot
    #[arg(long)]
    pub iced: bool,

    /// Milk in the drink
    #[arg(long, value_enum)]
    pub milk: Option<MilkType>,

    /// Price paid; input that does not parse as a number leaves the price unset
    #[arg(long)]
    pub price: Option<String>,

    /// Rating from 0 (unrated) to 5
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub rating: Option<u8>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Mood the drink pairs with
    #[arg(long, value_enum)]
    pub mood: Option<Mood>,

    /// May be given multiple times; duplicate tags are ignored
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Attach a photo file, stored inline with the entry
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only entries of this drink category
    #[arg(long, value_enum)]
    pub drink: Option<DrinkType>,

    /// Case-insensitive text search across drink name, location and notes
    #[arg(long)]
    pub search: Option<String>,

    /// Show at most this many entries
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Entry id (or unique prefix)
    pub id: String,

    /// Write the entry's photo to this path
    #[arg(long)]
    pub save_photo: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Entry id (or unique prefix)
    pub id: String,

    #[arg(long, value_enum)]
    pub drink: Option<DrinkType>,

    /// Specific drink name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long, value_enum)]
    pub temperature: Option<Temperature>,

    #[arg(long, value_enum)]
    pub milk: Option<MilkType>,

    /// New price; input that does not parse as a number leaves the price as-is
    #[arg(long)]
    pub price: Option<String>,

    /// Remove the price
    #[arg(long, conflicts_with = "price")]
    pub clear_price: bool,

    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub rating: Option<u8>,

    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long, value_enum)]
    pub mood: Option<Mood>,

    /// Remove the mood
    #[arg(long, conflicts_with = "mood")]
    pub clear_mood: bool,

    /// Add a tag; may be given multiple times, duplicates are ignored
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Drop every existing tag before applying --tag values
    #[arg(long)]
    pub clear_tags: bool,

    /// Replace the entry's photo with this file
    #[arg(long)]
    pub photo: Option<PathBuf>,

    /// Remove the photo
    #[arg(long, conflicts_with = "photo")]
    pub remove_photo: bool,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the current settings
    Show,
    /// Change one or more settings
    Set(SettingsSetArgs),
}

#[derive(Args, Debug)]
pub struct SettingsSetArgs {
    /// Name shown in greetings
    #[arg(long)]
    pub display_name: Option<String>,

    /// Short handle
    #[arg(long)]
    pub handle: Option<String>,

    /// Dark mode on or off
    #[arg(long)]
    pub dark_mode: Option<bool>,

    /// Daily reminder on or off
    #[arg(long)]
    pub reminder: Option<bool>,

    /// Reminder time as HH:MM
    #[arg(long)]
    pub reminder_time: Option<String>,

    /// Drink category pre-selected when logging
    #[arg(long, value_enum)]
    pub default_drink: Option<DrinkType>,
}
