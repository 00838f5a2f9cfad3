// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cipher::NameCipher;
use crate::error::PersistenceError;
use santify::{RESERVED_NAME_PREFIX, RunMetadata};
use santify_domain::CandidateMapping;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info};

/// The on-disk form of one run's result.
///
/// Metadata keys carry a leading underscore; participant names make up the
/// remaining keys and are refused if they start with one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// Encoded decryption key, or `None` if receivers are stored in clear.
    #[serde(rename = "_key")]
    pub key: Option<String>,
    /// Seed of the run's random stream.
    #[serde(rename = "_seed")]
    pub seed: u64,
    #[serde(rename = "_year")]
    pub year: u16,
    #[serde(rename = "_budget")]
    pub budget: Option<u32>,
    #[serde(rename = "_name")]
    pub display_name: String,
    #[serde(rename = "_id")]
    pub id: String,
    /// RFC 3339 timestamp of when the record was built.
    #[serde(rename = "_generated_at")]
    pub generated_at: String,
    /// Giver name to receiver name (or receiver token when encrypted).
    #[serde(flatten)]
    pub assignments: BTreeMap<String, String>,
}

impl MappingRecord {
    /// Builds a record for a generated mapping.
    ///
    /// # Arguments
    ///
    /// * `metadata` - The run's descriptive data
    /// * `seed` - Seed of the run's random stream
    /// * `mapping` - The accepted assignment
    /// * `cipher` - Encrypts receiver names when present
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A giver name starts with the reserved metadata prefix
    /// - A receiver name cannot be encrypted
    /// - The timestamp cannot be formatted
    pub fn build(
        metadata: &RunMetadata,
        seed: u64,
        mapping: &CandidateMapping,
        cipher: Option<&NameCipher>,
    ) -> Result<Self, PersistenceError> {
        if let Some((giver, _)) = mapping
            .pairs()
            .find(|(giver, _)| giver.starts_with(RESERVED_NAME_PREFIX))
        {
            return Err(PersistenceError::ReservedName(giver.to_string()));
        }

        let assignments: BTreeMap<String, String> = mapping
            .pairs()
            .map(|(giver, receiver)| -> Result<(String, String), PersistenceError> {
                let stored: String = match cipher {
                    Some(cipher) => cipher.encrypt(receiver)?,
                    None => receiver.to_string(),
                };
                Ok((giver.to_string(), stored))
            })
            .collect::<Result<_, _>>()?;

        let generated_at: String = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|err| PersistenceError::SerializationError(err.to_string()))?;

        Ok(Self {
            key: cipher.map(NameCipher::encoded_key),
            seed,
            year: metadata.year,
            budget: metadata.budget,
            display_name: metadata.display_name.clone(),
            id: metadata.id.clone(),
            generated_at,
            assignments,
        })
    }

    /// Returns whether receiver names are stored encrypted.
    #[must_use]
    pub const fn is_encrypted(&self) -> bool {
        self.key.is_some()
    }

    /// Returns the file name this record is written under.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("mapping_{}_{}.json", self.id, self.year)
    }

    /// Returns the assignments with receiver names in clear text.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored key is invalid or a token does not
    /// decrypt with it.
    pub fn reveal(&self) -> Result<BTreeMap<String, String>, PersistenceError> {
        let Some(key) = &self.key else {
            return Ok(self.assignments.clone());
        };

        let cipher: NameCipher = NameCipher::from_encoded_key(key)?;
        self.assignments
            .iter()
            .map(|(giver, token)| -> Result<(String, String), PersistenceError> {
                Ok((giver.clone(), cipher.decrypt(token)?))
            })
            .collect()
    }
}

/// Writes a record as pretty-printed JSON into `dir`.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns an error if:
/// - `dir` does not exist or is not a directory
/// - The record cannot be serialized
/// - The file cannot be written
pub fn write_mapping(dir: &Path, record: &MappingRecord) -> Result<PathBuf, PersistenceError> {
    if !dir.is_dir() {
        return Err(PersistenceError::OutputDirectoryMissing(
            dir.display().to_string(),
        ));
    }

    let path: PathBuf = dir.join(record.file_name());
    info!(
        encrypted = record.is_encrypted(),
        "Saving mapping to {}",
        path.display()
    );

    let mut text: String = serde_json::to_string_pretty(record)?;
    text.push('\n');
    std::fs::write(&path, text).map_err(|err| PersistenceError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    debug!(entries = record.assignments.len(), "Mapping file written");
    Ok(path)
}

/// Reads a record previously written by [`write_mapping`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a mapping record.
pub fn read_mapping(path: &Path) -> Result<MappingRecord, PersistenceError> {
    let text: String = std::fs::read_to_string(path).map_err(|err| PersistenceError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    Ok(serde_json::from_str(&text)?)
}
