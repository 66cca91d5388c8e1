//! Reading the three input tables

use crate::models::{Plan, TargetRow, ZipEntry};
use anyhow::{Context, Result};
use csv::{ByteRecord, Reader, ReaderBuilder};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Target table with its header line kept for the answer file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTable {
    pub header: String,
    pub rows: Vec<TargetRow>,
}

fn open(path: &Path) -> Result<Reader<File>> {
    ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))
}

// Rows stay as bytes; the record builders decode fields lossily.
fn read_rows<T>(
    path: &Path,
    build: impl Fn(&ByteRecord) -> T,
) -> Result<(ByteRecord, Vec<T>)> {
    let mut reader = open(path)?;
    let header = reader
        .byte_headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();

    let mut rows = Vec::new();
    for (i, record) in reader.byte_records().enumerate() {
        let record = record
            .with_context(|| format!("failed to read row {} of {}", i + 1, path.display()))?;
        rows.push(build(&record));
    }
    Ok((header, rows))
}

/// Load `zips.csv`, skipping its header
pub fn load_zips(path: &Path) -> Result<Vec<ZipEntry>> {
    let (_, zips) = read_rows(path, ZipEntry::from_record)?;
    info!("Loaded {} ZIP directory rows from {:?}", zips.len(), path);
    Ok(zips)
}

/// Load `plans.csv`, skipping its header
pub fn load_plans(path: &Path) -> Result<Vec<Plan>> {
    let (_, plans) = read_rows(path, Plan::from_record)?;
    info!("Loaded {} plans from {:?}", plans.len(), path);
    Ok(plans)
}

/// Load `slcsp.csv`, keeping its header verbatim
pub fn load_targets(path: &Path) -> Result<TargetTable> {
    let (header, rows) = read_rows(path, TargetRow::from_record)?;
    let header = header
        .iter()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(",");
    info!("Loaded {} target ZIPs from {:?}", rows.len(), path);
    Ok(TargetTable { header, rows })
}
