// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the notification layer.

use thiserror::Error;

/// Notification errors.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A required environment variable is not set.
    #[error("{0} environment variable is not set")]
    MissingEnvironment(String),

    /// A mapped name has no participant record to take contact data from.
    #[error("Participant '{0}' has no contact record")]
    UnknownParticipant(String),

    /// An address could not be parsed as a mailbox.
    #[error("Invalid address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    /// The message could not be assembled.
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP relay rejected the connection or the message.
    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
