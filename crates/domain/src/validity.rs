// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::ConstraintSet;

/// Checks whether a candidate permutation is an acceptable assignment.
///
/// Position `i` pairs giver `names[i]` with receiver `permutation[i]`.
/// The candidate is acceptable when no giver receives themselves and no
/// pair is forbidden by `constraints`. Stops at the first violation.
///
/// # Arguments
///
/// * `names` - Givers, in positional order
/// * `permutation` - Receivers, in the same positional order
/// * `constraints` - Forbidden pairs
///
/// # Errors
///
/// Returns `DomainError::LengthMismatch` if the two sequences differ in
/// length. This is a caller bug, never a rejected candidate.
pub fn is_valid_mapping(
    names: &[String],
    permutation: &[String],
    constraints: &ConstraintSet,
) -> Result<bool, DomainError> {
    if names.len() != permutation.len() {
        return Err(DomainError::LengthMismatch {
            names: names.len(),
            permutation: permutation.len(),
        });
    }

    for (giver, receiver) in names.iter().zip(permutation) {
        // Rule: nobody gives to themselves
        if giver == receiver {
            return Ok(false);
        }
        // Rule: forbidden pairs stay forbidden
        if constraints.forbids(giver, receiver) {
            return Ok(false);
        }
    }

    Ok(true)
}
