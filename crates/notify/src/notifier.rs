// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::NotifyError;
use crate::message::{Notification, compose_notification};
use santify::RunMetadata;
use santify_domain::{CandidateMapping, Participant};
use std::collections::HashMap;
use tracing::info;

/// Delivers composed notifications.
pub trait Notifier {
    /// Sends one notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be delivered.
    fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Who receives the notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Every giver is told their receiver at their own address.
    Live,
    /// A single message goes to the operator instead of any participant.
    Debug {
        /// The operator's address.
        operator: String,
    },
}

/// Sends one notification per (giver, receiver) pair.
///
/// In debug mode the first message is redirected to the operator and
/// nothing else is sent.
///
/// # Returns
///
/// The number of messages sent.
///
/// # Errors
///
/// Returns an error if a mapped name is missing from `participants` or a
/// delivery fails. Messages sent before the failure are not recalled.
pub fn dispatch_notifications<N>(
    mapping: &CandidateMapping,
    participants: &HashMap<&str, &Participant>,
    metadata: &RunMetadata,
    mode: &DeliveryMode,
    notifier: &N,
) -> Result<usize, NotifyError>
where
    N: Notifier + ?Sized,
{
    let lookup = |name: &str| -> Result<&Participant, NotifyError> {
        participants
            .get(name)
            .copied()
            .ok_or_else(|| NotifyError::UnknownParticipant(name.to_string()))
    };

    let mut sent: usize = 0;
    for (giver_name, receiver_name) in mapping.pairs() {
        let giver: &Participant = lookup(giver_name)?;
        let receiver: &Participant = lookup(receiver_name)?;

        let recipient: &str = match mode {
            DeliveryMode::Live => giver.email(),
            DeliveryMode::Debug { operator } => operator,
        };

        let notification: Notification =
            compose_notification(giver, receiver, metadata, recipient);
        notifier.send(&notification)?;
        sent += 1;
        info!("Notification sent to '{}' <{}>", giver.name(), recipient);

        if matches!(mode, DeliveryMode::Debug { .. }) {
            break;
        }
    }

    Ok(sent)
}
