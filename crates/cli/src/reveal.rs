// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use color_eyre::{Result, eyre::eyre};
use santify_persistence::{MappingRecord, read_mapping};
use tracing::info;

use crate::RevealArgs;

pub fn run(args: &RevealArgs) -> Result<()> {
    let record: MappingRecord = read_mapping(&args.file)?;
    info!(
        seed = record.seed,
        encrypted = record.is_encrypted(),
        "Loaded {} {}",
        record.display_name,
        record.year
    );

    let assignments: BTreeMap<String, String> = record.reveal()?;
    let giver: Option<&str> = args.giver.as_deref();
    let selected: BTreeMap<&str, &str> = select(&assignments, giver)
        .ok_or_else(|| eyre!("No assignment for giver '{}'", giver.unwrap_or_default()))?;

    print!("{}", render(&selected));
    Ok(())
}

/// Narrows the assignments to one giver, or keeps all of them.
///
/// Returns `None` when the requested giver has no assignment.
pub fn select<'a>(
    assignments: &'a BTreeMap<String, String>,
    giver: Option<&str>,
) -> Option<BTreeMap<&'a str, &'a str>> {
    match giver {
        Some(name) => assignments
            .get_key_value(name)
            .map(|(giver, receiver)| BTreeMap::from([(giver.as_str(), receiver.as_str())])),
        None => Some(
            assignments
                .iter()
                .map(|(giver, receiver)| (giver.as_str(), receiver.as_str()))
                .collect(),
        ),
    }
}

/// Renders one `giver -> receiver` line per pair, givers padded to align.
pub fn render(assignments: &BTreeMap<&str, &str>) -> String {
    let width: usize = assignments
        .keys()
        .map(|giver| giver.chars().count())
        .max()
        .unwrap_or(0);

    assignments
        .iter()
        .map(|(giver, receiver)| format!("{giver:<width$} -> {receiver}\n"))
        .collect()
}
