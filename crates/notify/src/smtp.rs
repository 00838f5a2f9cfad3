// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::NotifyError;
use crate::message::Notification;
use crate::notifier::Notifier;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::debug;

/// Relay used when none is configured.
pub const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";

/// Environment variable holding the sending account.
pub const ACCOUNT_VAR: &str = "GMAIL_ACCOUNT";

/// Environment variable holding the account's app password.
pub const PASSWORD_VAR: &str = "GMAIL_APP_PASSWORD";

/// Login for the sending account.
#[derive(Clone)]
pub struct SmtpCredentials {
    account: String,
    password: String,
}

impl std::fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

impl SmtpCredentials {
    #[must_use]
    pub const fn new(account: String, password: String) -> Self {
        Self { account, password }
    }

    /// Reads the credentials from `GMAIL_ACCOUNT` and `GMAIL_APP_PASSWORD`.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::MissingEnvironment` naming the first unset variable.
    pub fn from_env() -> Result<Self, NotifyError> {
        Ok(Self::new(env_var(ACCOUNT_VAR)?, env_var(PASSWORD_VAR)?))
    }

    /// Returns the sending account, which doubles as the operator address.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }
}

fn env_var(name: &str) -> Result<String, NotifyError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| NotifyError::MissingEnvironment(name.to_string()))
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| NotifyError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

/// Sends notifications as HTML email through an authenticated SMTP relay.
pub struct SmtpNotifier {
    sender: Mailbox,
    transport: SmtpTransport,
}

impl SmtpNotifier {
    /// Creates a notifier sending from the credentials' account.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is not a valid address or the relay
    /// cannot be configured.
    pub fn new(relay: &str, credentials: &SmtpCredentials) -> Result<Self, NotifyError> {
        let sender: Mailbox = parse_mailbox(&credentials.account)?;
        let transport: SmtpTransport = SmtpTransport::relay(relay)?
            .credentials(Credentials::new(
                credentials.account.clone(),
                credentials.password.clone(),
            ))
            .build();
        Ok(Self { sender, transport })
    }
}

impl Notifier for SmtpNotifier {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        let message: Message = Message::builder()
            .from(self.sender.clone())
            .to(parse_mailbox(&notification.to)?)
            .subject(notification.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(notification.body.clone())?;

        self.transport.send(&message)?;
        debug!(to = %notification.to, "SMTP relay accepted message");
        Ok(())
    }
}
