// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Run configuration.
//!
//! The configuration file is parsed into a raw serde schema first and then
//! validated into typed domain records. Nothing downstream ever sees the
//! raw form.

use crate::error::CoreError;
use santify_domain::{
    AliasTable, HistoricalMapping, Participant, validate_participant, validate_unique_names,
    validate_year,
};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{info, warn};

/// Participant names may not start with this prefix; it marks metadata
/// keys in the persisted mapping file.
pub const RESERVED_NAME_PREFIX: char = '_';

#[derive(Debug, Deserialize)]
struct RawConfig {
    id: String,
    name: String,
    year: u16,
    #[serde(default)]
    budget: Option<u32>,
    #[serde(default)]
    theme: Option<String>,
    people: BTreeMap<String, RawPerson>,
    #[serde(default)]
    previous: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    name_mapping: Option<AliasTable>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPerson {
    email: String,
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    partner: Option<String>,
    #[serde(default = "default_active")]
    is_active: bool,
}

/// Why a declared partner cannot produce a useful constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerIssue {
    Unknown,
    Inactive,
}

impl std::fmt::Display for PartnerIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Declared partner is not a known participant"),
            Self::Inactive => write!(f, "Declared partner is not taking part this year"),
        }
    }
}

/// Lists active participants whose partner constraint can never apply.
pub fn partner_issues(
    participants: &[Participant],
) -> Vec<(&str, &str, PartnerIssue)> {
    participants
        .iter()
        .filter(|participant| participant.is_active())
        .filter_map(|participant| {
            let partner: &str = participant.partner()?;
            let issue: PartnerIssue = match participants.iter().find(|p| p.name() == partner) {
                None => PartnerIssue::Unknown,
                Some(other) if !other.is_active() => PartnerIssue::Inactive,
                Some(_) => return None,
            };
            Some((participant.name(), partner, issue))
        })
        .collect()
}

const fn default_active() -> bool {
    true
}

/// Descriptive data about a run, carried into notifications and the
/// persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    /// Short identifier used in output file names.
    pub id: String,
    /// Human-readable group name (e.g. "Smith Family").
    pub display_name: String,
    /// The year being drawn.
    pub year: u16,
    /// Optional gift theme.
    pub theme: Option<String>,
    /// Optional spending limit, in whole currency units.
    pub budget: Option<u32>,
}

/// A validated run configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    metadata: RunMetadata,
    participants: Vec<Participant>,
    history: Vec<HistoricalMapping>,
    aliases: AliasTable,
}

impl SessionConfig {
    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ConfigRead` if the file cannot be read, and
    /// `CoreError::Configuration` if its content is invalid.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        info!("Reading configuration from {}", path.display());
        let text: String =
            std::fs::read_to_string(path).map_err(|err| CoreError::ConfigRead {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
        Self::from_json_str(&text)
    }

    /// Parses and validates a configuration document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if:
    /// - The document is not valid JSON or a required field is absent
    /// - The id or display name is empty
    /// - The year is out of range
    /// - A participant record is invalid
    /// - A historical year key is not a number
    pub fn from_json_str(text: &str) -> Result<Self, CoreError> {
        let raw: RawConfig =
            serde_json::from_str(text).map_err(|err| CoreError::Configuration(err.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, CoreError> {
        if raw.id.trim().is_empty() {
            return Err(CoreError::Configuration(String::from(
                "Run id cannot be empty",
            )));
        }
        if raw.name.trim().is_empty() {
            return Err(CoreError::Configuration(String::from(
                "Display name cannot be empty",
            )));
        }
        validate_year(raw.year).map_err(|err| CoreError::Configuration(err.to_string()))?;

        let participants: Vec<Participant> = raw
            .people
            .into_iter()
            .map(|(name, person)| {
                Participant::new(&name, &person.email)
                    .with_alias(person.alias)
                    .with_partner(person.partner)
                    .with_active(person.is_active)
            })
            .collect();

        for participant in &participants {
            validate_participant(participant)
                .map_err(|err| CoreError::Configuration(err.to_string()))?;
            if participant.name().starts_with(RESERVED_NAME_PREFIX) {
                return Err(CoreError::Configuration(format!(
                    "Participant name '{}' is reserved: names may not start with '{RESERVED_NAME_PREFIX}'",
                    participant.name()
                )));
            }
        }
        validate_unique_names(&participants)
            .map_err(|err| CoreError::Configuration(err.to_string()))?;

        for (participant, partner, issue) in partner_issues(&participants) {
            warn!(participant, partner, "{issue}");
        }

        let history: Vec<HistoricalMapping> = raw
            .previous
            .into_iter()
            .map(|(year, mapping)| {
                year.trim()
                    .parse::<u16>()
                    .map(|y| HistoricalMapping::new(y, mapping))
                    .map_err(|_| {
                        CoreError::Configuration(format!(
                            "Previous year '{year}' is not a valid year"
                        ))
                    })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            metadata: RunMetadata {
                id: raw.id,
                display_name: raw.name,
                year: raw.year,
                theme: raw.theme.filter(|t| !t.trim().is_empty()),
                budget: raw.budget,
            },
            participants,
            history,
            aliases: raw.name_mapping.unwrap_or_default(),
        })
    }

    #[must_use]
    pub const fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    /// Returns every configured participant, ordered by name.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Returns the participants taking part this year, ordered by name.
    #[must_use]
    pub fn active_participants(&self) -> Vec<&Participant> {
        santify_domain::active_participants(&self.participants)
    }

    /// Returns the active participants keyed by name.
    #[must_use]
    pub fn active_by_name(&self) -> HashMap<&str, &Participant> {
        self.active_participants()
            .into_iter()
            .map(|p| (p.name(), p))
            .collect()
    }

    #[must_use]
    pub fn history(&self) -> &[HistoricalMapping] {
        &self.history
    }

    #[must_use]
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }
}
