//! Entry data model.
//!
//! This module defines the journal entry record, its enumerated attributes,
//! and the draft type used to create or rewrite an entry. All persistence
//! lives in `db`; everything here is plain data plus validation.

use crate::constants::{DEFAULT_RATING, MAX_RATING};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Broad category of a logged drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    Coffee,
    Matcha,
    Other,
}

impl DrinkType {
    /// Stable label used for database storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkType::Coffee => "Coffee",
            DrinkType::Matcha => "Matcha",
            DrinkType::Other => "Other",
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrinkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Coffee" => Ok(DrinkType::Coffee),
            "Matcha" => Ok(DrinkType::Matcha),
            "Other" => Ok(DrinkType::Other),
            other => Err(format!("unknown drink type '{}'", other)),
        }
    }
}

/// Serving temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Hot,
    Iced,
}

impl Temperature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Hot => "Hot",
            Temperature::Iced => "Iced",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Temperature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hot" => Ok(Temperature::Hot),
            "Iced" => Ok(Temperature::Iced),
            other => Err(format!("unknown temperature '{}'", other)),
        }
    }
}

/// Kind of milk in the drink, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MilkType {
    None,
    Dairy,
    Oat,
    Almond,
    Soy,
    Coconut,
}

impl MilkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilkType::None => "None",
            MilkType::Dairy => "Dairy",
            MilkType::Oat => "Oat",
            MilkType::Almond => "Almond",
            MilkType::Soy => "Soy",
            MilkType::Coconut => "Coconut",
        }
    }
}

impl fmt::Display for MilkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MilkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(MilkType::None),
            "Dairy" => Ok(MilkType::Dairy),
            "Oat" => Ok(MilkType::Oat),
            "Almond" => Ok(MilkType::Almond),
            "Soy" => Ok(MilkType::Soy),
            "Coconut" => Ok(MilkType::Coconut),
            other => Err(format!("unknown milk type '{}'", other)),
        }
    }
}

/// Mood attached to an entry. Absence of a mood is a distinct state,
/// modeled as `Option<Mood>` on the entry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Relaxing,
    Energizing,
    Social,
    Productive,
    Cozy,
    Adventurous,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Relaxing => "Relaxing",
            Mood::Energizing => "Energizing",
            Mood::Social => "Social",
            Mood::Productive => "Productive",
            Mood::Cozy => "Cozy",
            Mood::Adventurous => "Adventurous",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Relaxing" => Ok(Mood::Relaxing),
            "Energizing" => Ok(Mood::Energizing),
            "Social" => Ok(Mood::Social),
            "Productive" => Ok(Mood::Productive),
            "Cozy" => Ok(Mood::Cozy),
            "Adventurous" => Ok(Mood::Adventurous),
            other => Err(format!("unknown mood '{}'", other)),
        }
    }
}

/// A single journal entry.
///
/// The store exclusively owns persisted entries; values handed out by
/// reads are snapshots. `id` and `created_at` never change after
/// construction, `updated_at` is refreshed on every edit, and
/// `updated_at >= created_at` holds at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub drink_type: DrinkType,
    /// Free-text subtype (e.g. "Latte"); may be empty, in which case
    /// display falls back to the drink-type label.
    pub specific_drink: String,
    pub location: String,
    pub temperature: Temperature,
    pub milk_type: MilkType,
    /// Non-negative amount; `None` means unspecified, not zero.
    pub price: Option<f64>,
    /// In `[0, 5]`; zero means "unrated".
    pub rating: u8,
    pub notes: String,
    pub mood: Option<Mood>,
    /// Ordered set: no duplicates (case-sensitive), insertion order kept.
    pub tags: Vec<String>,
    pub photo: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Name the entry is displayed and grouped under: the specific drink,
    /// falling back to the drink-type label when empty.
    pub fn display_drink(&self) -> &str {
        if self.specific_drink.is_empty() {
            self.drink_type.as_str()
        } else {
            &self.specific_drink
        }
    }
}

/// Caller-supplied field values for creating or rewriting an entry.
///
/// Defaults mirror the capture form: hot coffee, no milk, rating 4,
/// everything else empty. An update replaces every mutable field of the
/// target entry with the draft's values.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub drink_type: DrinkType,
    pub specific_drink: String,
    pub location: String,
    pub temperature: Temperature,
    pub milk_type: MilkType,
    pub price: Option<f64>,
    pub rating: u8,
    pub notes: String,
    pub mood: Option<Mood>,
    pub tags: Vec<String>,
    pub photo: Option<Vec<u8>>,
}

impl Default for EntryDraft {
    fn default() -> Self {
        EntryDraft {
            drink_type: DrinkType::Coffee,
            specific_drink: String::new(),
            location: String::new(),
            temperature: Temperature::Hot,
            milk_type: MilkType::None,
            price: None,
            rating: DEFAULT_RATING,
            notes: String::new(),
            mood: None,
            tags: Vec::new(),
            photo: None,
        }
    }
}

impl EntryDraft {
    /// Checks the draft's field values against the entry invariants.
    ///
    /// The original capture flow never validated these at the model layer;
    /// here out-of-range values are rejected rather than clamped so bad
    /// input cannot reach the store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the rating exceeds the maximum
    /// or the price is negative.
    pub fn validate(&self) -> AppResult<()> {
        if self.rating > MAX_RATING {
            return Err(AppError::Validation(format!(
                "rating {} is out of range 0..={}",
                self.rating, MAX_RATING
            )));
        }

        if let Some(price) = self.price {
            if price < 0.0 {
                return Err(AppError::Validation(format!(
                    "price {} must not be negative",
                    price
                )));
            }
            if !price.is_finite() {
                return Err(AppError::Validation("price must be a finite amount".to_string()));
            }
        }

        Ok(())
    }

    /// Adds a tag unless an identical tag is already present.
    ///
    /// Comparison is case-sensitive exact match; insertion order is kept.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}

/// Removes duplicate tags, keeping the first occurrence of each.
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}
