//! ZIP code to rate area resolution

use crate::models::{RateAreaKey, ZipEntry};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("ZIP {0} is not in the directory")]
    NotFound(String),

    #[error("ZIP {0} spans more than one rate area")]
    Ambiguous(String),
}

/// ZIP directory grouped by ZIP code. Entries keep their file order, so the
/// first row loaded for a ZIP is the first row of its group.
#[derive(Debug, Default)]
pub struct ZipDirectory<'a> {
    by_zip: HashMap<&'a str, Vec<&'a ZipEntry>>,
}

impl<'a> ZipDirectory<'a> {
    pub fn new(entries: &'a [ZipEntry]) -> Self {
        let mut by_zip: HashMap<&str, Vec<&ZipEntry>> = HashMap::new();
        for entry in entries {
            by_zip.entry(entry.zip_code.as_str()).or_default().push(entry);
        }
        Self { by_zip }
    }

    pub fn entries(&self, zip_code: &str) -> &[&'a ZipEntry] {
        self.by_zip.get(zip_code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn resolve(&self, zip_code: &str) -> Result<RateAreaKey, ResolveError> {
        resolve_matches(zip_code, self.entries(zip_code))
    }
}

/// Resolve a ZIP by scanning the whole directory.
pub fn resolve(zip_code: &str, zips: &[ZipEntry]) -> Result<RateAreaKey, ResolveError> {
    let matches: Vec<&ZipEntry> = zips.iter().filter(|z| z.zip_code == zip_code).collect();
    resolve_matches(zip_code, &matches)
}

// Every match is compared against the first match's rate area only; the
// state comes from the first match.
fn resolve_matches(zip_code: &str, matches: &[&ZipEntry]) -> Result<RateAreaKey, ResolveError> {
    let first = matches
        .first()
        .ok_or_else(|| ResolveError::NotFound(zip_code.to_string()))?;

    if matches.iter().any(|z| z.rate_area != first.rate_area) {
        return Err(ResolveError::Ambiguous(zip_code.to_string()));
    }

    Ok(first.rate_area_key())
}
