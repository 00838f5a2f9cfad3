// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derivation of forbidden pairings.
//!
//! Two sources produce constraints:
//!
//! - Partner declarations: a participant never gives to their declared
//!   partner. Only the declared direction is forbidden; mutual exclusion
//!   requires both participants to name each other.
//! - Past years: nobody gives to the person they gave to before. Historical
//!   names pass through the alias table first, and a name that was split
//!   into several current names forbids every combination.
//!
//! Over-exclusion from ambiguous aliases is accepted. It may make a
//! configuration unsolvable, which surfaces as generation exhaustion.

use crate::types::{AliasTable, Constraint, ConstraintSet, HistoricalMapping, Participant};

/// Returns the participants taking part in the draw, in their original order.
#[must_use]
pub fn active_participants(participants: &[Participant]) -> Vec<&Participant> {
    participants.iter().filter(|p| p.is_active()).collect()
}

/// Builds one constraint `(name, partner)` per participant that declares a partner.
#[must_use]
pub fn build_partner_constraints<'a, I>(participants: I) -> Vec<Constraint>
where
    I: IntoIterator<Item = &'a Participant>,
{
    participants
        .into_iter()
        .filter_map(|p| p.partner().map(|partner| Constraint::new(p.name(), partner)))
        .collect()
}

/// Builds the constraints implied by one past year's assignments.
///
/// Each historical pair expands to the cross product of the resolved giver
/// names and the resolved receiver names.
#[must_use]
pub fn build_history_constraints(
    historical: &HistoricalMapping,
    aliases: &AliasTable,
) -> Vec<Constraint> {
    historical
        .pairs()
        .flat_map(|(giver, receiver)| {
            let receivers: Vec<&str> = aliases.resolve(receiver);
            aliases
                .resolve(giver)
                .into_iter()
                .flat_map(move |g| {
                    receivers
                        .clone()
                        .into_iter()
                        .map(move |r| Constraint::new(g, r))
                })
        })
        .collect()
}

/// Builds the full constraint set for a run.
///
/// # Arguments
///
/// * `participants` - Participants whose partner declarations apply
/// * `historical_mappings` - Past years' assignments
/// * `aliases` - Renames and splits applied to historical names
#[must_use]
pub fn build_constraints<'a, I>(
    participants: I,
    historical_mappings: &[HistoricalMapping],
    aliases: &AliasTable,
) -> ConstraintSet
where
    I: IntoIterator<Item = &'a Participant>,
{
    let mut constraints: ConstraintSet = build_partner_constraints(participants)
        .into_iter()
        .collect();

    for historical in historical_mappings {
        constraints.extend(build_history_constraints(historical, aliases));
    }

    constraints
}
