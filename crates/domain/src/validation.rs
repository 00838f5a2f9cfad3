// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Participant;
use std::collections::HashSet;

/// Validates that a participant's required fields are present.
///
/// Does NOT check name uniqueness (that requires the whole group).
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The email address is empty or has no `@`
/// - The alias or partner is present but blank
pub fn validate_participant(participant: &Participant) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidParticipant {
        name: participant.name().to_string(),
        reason: reason.to_string(),
    };

    // Rule: name must not be empty
    if participant.name().trim().is_empty() {
        return Err(invalid("Name cannot be empty"));
    }

    // Rule: email must look like an address
    if participant.email().trim().is_empty() {
        return Err(invalid("Email cannot be empty"));
    }
    if !participant.email().contains('@') {
        return Err(invalid("Email must contain '@'"));
    }

    if participant.alias().is_some_and(|a| a.trim().is_empty()) {
        return Err(invalid("Alias cannot be blank"));
    }
    if participant.partner().is_some_and(|p| p.trim().is_empty()) {
        return Err(invalid("Partner cannot be blank"));
    }

    Ok(())
}

/// Validates that no two participants share a name.
///
/// # Errors
///
/// Returns `DomainError::DuplicateParticipant` naming the first repeat.
pub fn validate_unique_names(participants: &[Participant]) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !seen.insert(participant.name()) {
            return Err(DomainError::DuplicateParticipant(
                participant.name().to_string(),
            ));
        }
    }
    Ok(())
}

/// Validates that a year is a reasonable calendar year (1900-2200).
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` if the year is out of range.
pub fn validate_year(year: u16) -> Result<(), DomainError> {
    if !(1900..=2200).contains(&year) {
        return Err(DomainError::InvalidYear(format!(
            "Year must be between 1900 and 2200, got {year}"
        )));
    }
    Ok(())
}
