// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use santify::RunMetadata;
use santify_domain::Participant;

/// A message ready to be handed to a [`crate::Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Address the message is delivered to.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub body: String,
}

/// Composes the message telling `giver` who they give to.
///
/// The receiver is shown by alias when one is set. `recipient` is the
/// address the message goes to, which is the giver's own address except
/// in debug delivery.
#[must_use]
pub fn compose_notification(
    giver: &Participant,
    receiver: &Participant,
    metadata: &RunMetadata,
    recipient: &str,
) -> Notification {
    let theme_line: String = metadata
        .theme
        .as_ref()
        .map(|theme| format!("This year's theme is: <strong>{theme}</strong>"))
        .unwrap_or_default();
    let budget_line: String = metadata
        .budget
        .map(|budget| format!("Gift budget: {budget}. "))
        .unwrap_or_default();

    let body: String = format!(
        "Hi {giver},\n\
         \n\
         This year you are Secret Santa for: <strong>{receiver}</strong>.\n\
         \n\
         Shh, don't tell anyone! 🤫\n\
         \n\
         {theme_line}\n\
         \n\
         <small>{budget_line}This message was sent by Santify.</small>",
        giver = giver.name(),
        receiver = receiver.display_name(),
    );

    Notification {
        to: recipient.to_string(),
        subject: format!(
            "{} Secret Santa {}! 🎄🎅",
            metadata.display_name, metadata.year
        ),
        body,
    }
}
