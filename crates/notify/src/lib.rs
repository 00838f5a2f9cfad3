// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod message;
mod notifier;
mod smtp;

#[cfg(test)]
mod tests;

pub use error::NotifyError;
pub use message::{Notification, compose_notification};
pub use notifier::{DeliveryMode, Notifier, dispatch_notifications};
pub use smtp::{ACCOUNT_VAR, DEFAULT_SMTP_RELAY, PASSWORD_VAR, SmtpCredentials, SmtpNotifier};
