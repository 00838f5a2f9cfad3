// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A person taking part in the gift exchange.
///
/// Participants are built once per run from configuration and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Participant {
    /// Unique name. Used as the giver/receiver identifier.
    name: String,
    /// Address notifications are delivered to.
    email: String,
    /// Name shown to the giver instead of `name`, if set.
    alias: Option<String>,
    /// Name of the participant this person must not give to.
    partner: Option<String>,
    /// Whether the participant takes part in this year's draw.
    is_active: bool,
}

// Identity is (name, email); alias, partner and activity are descriptive only.
impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }
}

impl Eq for Participant {}

impl std::hash::Hash for Participant {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.email.hash(state);
    }
}

impl Participant {
    /// Creates an active participant without alias or partner.
    ///
    /// # Arguments
    ///
    /// * `name` - The participant's unique name
    /// * `email` - The participant's contact address
    #[must_use]
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            alias: None,
            partner: None,
            is_active: true,
        }
    }

    /// Sets the display alias.
    #[must_use]
    pub fn with_alias(mut self, alias: Option<String>) -> Self {
        self.alias = alias;
        self
    }

    /// Sets the partner this participant must not give to.
    #[must_use]
    pub fn with_partner(mut self, partner: Option<String>) -> Self {
        self.partner = partner;
        self
    }

    /// Sets whether the participant takes part in the draw.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    #[must_use]
    pub fn partner(&self) -> Option<&str> {
        self.partner.as_deref()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the name a giver should see: the alias if set, otherwise the name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// A forbidden directed pairing: `giver` may not give to `receiver`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Constraint {
    giver: String,
    receiver: String,
}

impl Constraint {
    /// Creates a constraint forbidding `giver` from giving to `receiver`.
    #[must_use]
    pub fn new(giver: &str, receiver: &str) -> Self {
        Self {
            giver: giver.to_string(),
            receiver: receiver.to_string(),
        }
    }

    #[must_use]
    pub fn giver(&self) -> &str {
        &self.giver
    }

    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }
}

/// A set of forbidden pairings, indexed by giver.
///
/// Membership checks borrow both names, so validating a candidate
/// permutation never allocates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    forbidden: HashMap<String, HashSet<String>>,
    len: usize,
}

impl ConstraintSet {
    /// Creates an empty constraint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint. Returns `false` if it was already present.
    pub fn insert(&mut self, constraint: Constraint) -> bool {
        let inserted: bool = self
            .forbidden
            .entry(constraint.giver)
            .or_default()
            .insert(constraint.receiver);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns whether `giver` is forbidden from giving to `receiver`.
    #[must_use]
    pub fn forbids(&self, giver: &str, receiver: &str) -> bool {
        self.forbidden
            .get(giver)
            .is_some_and(|receivers| receivers.contains(receiver))
    }

    #[must_use]
    pub fn contains(&self, constraint: &Constraint) -> bool {
        self.forbids(&constraint.giver, &constraint.receiver)
    }

    /// Returns the number of distinct constraints.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns all constraints in sorted order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<Constraint> {
        let mut constraints: Vec<Constraint> = self
            .forbidden
            .iter()
            .flat_map(|(giver, receivers)| {
                receivers
                    .iter()
                    .map(move |receiver| Constraint::new(giver, receiver))
            })
            .collect();
        constraints.sort();
        constraints
    }
}

impl Extend<Constraint> for ConstraintSet {
    fn extend<I: IntoIterator<Item = Constraint>>(&mut self, iter: I) {
        for constraint in iter {
            self.insert(constraint);
        }
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        let mut set: Self = Self::new();
        set.extend(iter);
        set
    }
}

/// The current name(s) an old name resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasTarget {
    /// A plain rename.
    Single(String),
    /// A split: the old name now stands for several people.
    Many(Vec<String>),
}

/// Maps names used in past years to the names used today.
///
/// Names missing from the table resolve to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: BTreeMap<String, AliasTarget>,
}

impl AliasTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `old_name`.
    pub fn insert(&mut self, old_name: &str, target: AliasTarget) {
        self.entries.insert(old_name.to_string(), target);
    }

    /// Resolves a historical name to every current name it stands for.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> Vec<&'a str> {
        match self.entries.get(name) {
            None => vec![name],
            Some(AliasTarget::Single(target)) => vec![target.as_str()],
            Some(AliasTarget::Many(targets)) => targets.iter().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, AliasTarget)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (String, AliasTarget)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A previous year's assignments, used only to derive constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalMapping {
    year: u16,
    mapping: BTreeMap<String, String>,
}

impl HistoricalMapping {
    #[must_use]
    pub const fn new(year: u16, mapping: BTreeMap<String, String>) -> Self {
        Self { year, mapping }
    }

    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Iterates over the recorded (giver, receiver) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mapping
            .iter()
            .map(|(giver, receiver)| (giver.as_str(), receiver.as_str()))
    }
}

/// A generated assignment of givers to receivers.
///
/// Only produced by the mapping generator after the assignment passed
/// validation, so every value here is a fixed-point-free bijection that
/// respects the constraint set it was generated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMapping {
    year: Option<u16>,
    mapping: BTreeMap<String, String>,
}

impl CandidateMapping {
    pub(crate) const fn new(year: Option<u16>, mapping: BTreeMap<String, String>) -> Self {
        Self { year, mapping }
    }

    #[must_use]
    pub const fn year(&self) -> Option<u16> {
        self.year
    }

    /// Returns the receiver assigned to `giver`.
    #[must_use]
    pub fn receiver_of(&self, giver: &str) -> Option<&str> {
        self.mapping.get(giver).map(String::as_str)
    }

    /// Iterates over (giver, receiver) pairs ordered by giver.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mapping
            .iter()
            .map(|(giver, receiver)| (giver.as_str(), receiver.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, String> {
        &self.mapping
    }
}

impl std::fmt::Display for CandidateMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width: usize = self
            .mapping
            .keys()
            .map(|giver| giver.chars().count())
            .max()
            .unwrap_or(0);
        for (giver, receiver) in &self.mapping {
            writeln!(f, "{giver:<width$} -> {receiver}")?;
        }
        Ok(())
    }
}
