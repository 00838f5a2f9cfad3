// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::{Path, PathBuf};

use color_eyre::{Result, eyre::Context};
use santify::{SessionConfig, SessionOptions, SessionOutcome, run_session};
use santify_notify::{
    DEFAULT_SMTP_RELAY, DeliveryMode, SmtpCredentials, SmtpNotifier, dispatch_notifications,
};
use santify_persistence::{MappingRecord, NameCipher, write_mapping};
use tracing::{info, warn};

use crate::GenerateArgs;
use crate::prompt::confirm;

pub fn run(args: &GenerateArgs) -> Result<()> {
    let config: SessionConfig = SessionConfig::load_from(&args.config)?;
    let options: SessionOptions = SessionOptions {
        max_iterations: args.max_iterations,
        seed: args.seed,
    };

    let outcome: SessionOutcome = run_session(&config, &options)?;
    info!(
        seed = outcome.seed,
        attempts = outcome.attempts,
        constraints = outcome.constraint_count,
        "Draw complete for {} {}",
        config.metadata().display_name,
        config.metadata().year
    );

    if args.debug {
        println!("{}", outcome.mapping);
    }

    if let Some(dir) = &args.outdir {
        let path: PathBuf = save(dir, &config, &outcome, args.encrypt)?;
        println!("Mapping written to {}", path.display());
    }

    if args.email {
        notify(args, &config, &outcome)?;
    }

    Ok(())
}

fn save(
    dir: &Path,
    config: &SessionConfig,
    outcome: &SessionOutcome,
    encrypt: bool,
) -> Result<PathBuf> {
    let cipher: Option<NameCipher> = encrypt.then(NameCipher::generate);
    let record: MappingRecord = MappingRecord::build(
        config.metadata(),
        outcome.seed,
        &outcome.mapping,
        cipher.as_ref(),
    )?;

    write_mapping(dir, &record)
        .wrap_err_with(|| format!("Failed to save mapping into {}", dir.display()))
}

fn notify(args: &GenerateArgs, config: &SessionConfig, outcome: &SessionOutcome) -> Result<()> {
    let credentials: SmtpCredentials = SmtpCredentials::from_env()?;
    let mode: DeliveryMode = if args.debug {
        DeliveryMode::Debug {
            operator: credentials.account().to_string(),
        }
    } else {
        DeliveryMode::Live
    };

    if mode == DeliveryMode::Live && !args.yes {
        let question: String = format!(
            "Send {} emails for {} {}?",
            outcome.mapping.len(),
            config.metadata().display_name,
            config.metadata().year
        );
        let mut stdin = std::io::stdin().lock();
        if !confirm(&question, &mut stdin).wrap_err("Failed to read confirmation")? {
            warn!("Sending aborted, no emails were sent");
            return Ok(());
        }
    }

    let notifier: SmtpNotifier = SmtpNotifier::new(DEFAULT_SMTP_RELAY, &credentials)?;
    let sent: usize = dispatch_notifications(
        &outcome.mapping,
        &config.active_by_name(),
        config.metadata(),
        &mode,
        &notifier,
    )?;
    info!(sent, "Notifications delivered");
    Ok(())
}
