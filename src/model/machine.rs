//! Training machine domain model.
//!
//! Provides `MachineRecord`, the normalized form of a machine as reported by the
//! HackTheBox catalog, along with the difficulty and operating system classifications
//! and their Discord emoji icons. Records are built fresh from every API response and are
//! compared by value; no identity survives between fetches.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::{error::catalog::CatalogError, util::json};

/// Timestamp pattern used by the catalog for release dates.
///
/// The six-digit fraction is mandatory; any other shape means the API contract changed.
const RELEASE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%6fZ";

/// Field names carrying the difficulty label, in priority order.
///
/// Newer endpoints use `difficulty_text`; it takes precedence when both are present.
const DIFFICULTY_FIELDS: [&str; 2] = ["difficulty_text", "difficultyText"];

/// Difficulty rating of a machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Any label the bot does not recognise, kept verbatim for display.
    Unknown(String),
}

impl Difficulty {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Easy => ":green_circle:",
            Self::Medium => ":orange_circle:",
            Self::Hard => ":red_circle:",
            Self::Unknown(_) => ":white_circle:",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => f.write_str("Easy"),
            Self::Medium => f.write_str("Medium"),
            Self::Hard => f.write_str("Hard"),
            Self::Unknown(label) => f.write_str(label),
        }
    }
}

/// Broad operating system family, which is all the icon depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    /// Linux and the BSDs.
    LinuxFamily,
    Unknown,
}

/// Operating system a machine runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatingSystem {
    Windows,
    Linux,
    FreeBSD,
    OpenBSD,
    /// Any other OS name, kept verbatim for display.
    Unknown(String),
}

impl OperatingSystem {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Windows" => Self::Windows,
            "Linux" => Self::Linux,
            "FreeBSD" => Self::FreeBSD,
            "OpenBSD" => Self::OpenBSD,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn family(&self) -> OsFamily {
        match self {
            Self::Windows => OsFamily::Windows,
            Self::Linux | Self::FreeBSD | Self::OpenBSD => OsFamily::LinuxFamily,
            Self::Unknown(_) => OsFamily::Unknown,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.family() {
            OsFamily::Windows => ":window:",
            OsFamily::LinuxFamily => ":penguin:",
            OsFamily::Unknown => ":question:",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("Windows"),
            Self::Linux => f.write_str("Linux"),
            Self::FreeBSD => f.write_str("FreeBSD"),
            Self::OpenBSD => f.write_str("OpenBSD"),
            Self::Unknown(name) => f.write_str(name),
        }
    }
}

/// A training machine as reported by the remote catalog.
///
/// Every attribute except `name` is optional because each endpoint returns a different
/// subset of fields. Icons are not stored: `difficulty_icon` and `os_icon` are derived from
/// `difficulty` and `os` on demand, so they can never disagree with the underlying value and
/// are absent exactly when the value is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineRecord {
    /// Machine name, unique within a sync pass when compared case-insensitively.
    pub name: String,
    pub difficulty: Option<Difficulty>,
    pub os: Option<OperatingSystem>,
    pub release_date: Option<NaiveDate>,
    /// Creator names in discovery order, duplicates kept.
    pub creators: Vec<String>,
    /// Name of the machine that retires to make room for this one.
    pub retiring: Option<String>,
    /// Free-text platform notes.
    pub info_status: Option<String>,
}

impl MachineRecord {
    /// Normalizes a catalog machine object into a `MachineRecord`.
    ///
    /// Each attribute is read only if present; nothing is defaulted. Creators are gathered
    /// from `maker`, `maker2`, `firstCreator` and `coCreators`, in that order, skipping any
    /// malformed entries.
    ///
    /// # Arguments
    /// - `value` - Machine object from a list or profile response
    ///
    /// # Returns
    /// - `Ok(MachineRecord)` - Successfully normalized record
    /// - `Err(CatalogError::MissingField)` - The object has no string `name`
    /// - `Err(CatalogError::MalformedTimestamp)` - `release` is present but unparsable
    pub fn from_json(value: &Value) -> Result<Self, CatalogError> {
        let name = json::string(value, "name")
            .ok_or_else(|| CatalogError::MissingField("name".to_string()))?;

        let release_date = json::string(value, "release")
            .map(|raw| parse_release_date(&raw))
            .transpose()?;

        let mut creators = Vec::new();
        creators.extend(json::nested_name(value, "maker"));
        creators.extend(json::nested_name(value, "maker2"));
        creators.extend(json::names_in_list(value, "firstCreator"));
        creators.extend(json::names_in_list(value, "coCreators"));

        Ok(Self {
            name,
            difficulty: json::first_string(value, &DIFFICULTY_FIELDS).map(Difficulty::from_label),
            os: value
                .get("os")
                .and_then(Value::as_str)
                .map(OperatingSystem::from_name),
            release_date,
            creators,
            retiring: json::nested_name(value, "retiring"),
            info_status: json::string(value, "infoStatus"),
        })
    }

    pub fn difficulty_icon(&self) -> Option<&'static str> {
        self.difficulty.as_ref().map(Difficulty::icon)
    }

    pub fn os_icon(&self) -> Option<&'static str> {
        self.os.as_ref().map(OperatingSystem::icon)
    }

    /// Renders every attribute that is set as `Label: value`, joined with ` | `.
    ///
    /// Order is fixed: name (when `include_name`), release date, OS, difficulty, creators,
    /// retirement. Used for digests and, without the name, as the channel topic.
    pub fn to_display_string(&self, include_name: bool) -> String {
        let mut parts = Vec::new();

        if include_name {
            parts.push(format!("Name: {}", self.name));
        }
        if let Some(date) = self.release_date {
            parts.push(format!("Release date: {}", date.format("%Y-%m-%d")));
        }
        if let Some(os) = &self.os {
            parts.push(format!("OS: {} {}", os, os.icon()));
        }
        if let Some(difficulty) = &self.difficulty {
            parts.push(format!("Difficulty: {} {}", difficulty, difficulty.icon()));
        }
        if !self.creators.is_empty() {
            parts.push(format!("Box creator: {}", self.creators.join(", ")));
        }
        if let Some(retiring) = &self.retiring {
            parts.push(format!("Retiring: {}", retiring));
        }

        parts.join(" | ")
    }

    /// Compact one-line form: name, OS icon, difficulty icon and creators in parentheses.
    ///
    /// Intended for records from the active-machines list, which always carries OS and
    /// difficulty. Missing icons render as empty text.
    pub fn to_short_display_string(&self) -> String {
        let mut result = format!(
            "{} {} {}",
            self.name,
            self.os_icon().unwrap_or_default(),
            self.difficulty_icon().unwrap_or_default()
        );

        if !self.creators.is_empty() {
            result.push_str(&format!(" ({})", self.creators.join(", ")));
        }

        result
    }
}

fn parse_release_date(raw: &str) -> Result<NaiveDate, CatalogError> {
    NaiveDateTime::parse_from_str(raw, RELEASE_TIMESTAMP_FORMAT)
        .map(|timestamp| timestamp.date())
        .map_err(|source| CatalogError::MalformedTimestamp {
            value: raw.to_string(),
            source,
        })
}

#[cfg(test)]
mod test;
