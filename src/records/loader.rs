use super::*;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// Files with a `.csv` extension directly inside `dir`, in lexical order.
pub fn scan(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("read directory {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("list directory {}", dir.display()))?
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .collect::<Vec<_>>();
    paths.sort();
    Ok(paths)
}

/// Parses one CSV file, preserving row order.
pub fn load_file(path: &Path) -> anyhow::Result<Vec<TrialRecord>> {
    csv::Reader::from_path(path)
        .with_context(|| format!("open {}", path.display()))?
        .deserialize::<TrialRecord>()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parse {}", path.display()))
}

/// Concatenates every CSV file in `dir`.
///
/// An empty directory yields no records; a missing directory or a malformed
/// file is an error.
pub fn load(dir: &Path) -> anyhow::Result<Vec<TrialRecord>> {
    let paths = scan(dir)?;
    log::info!("loading {} files from {}", paths.len(), dir.display());
    let mut records = Vec::new();
    for path in paths.iter() {
        let batch = load_file(path)?;
        log::debug!("{:>8} records from {}", batch.len(), path.display());
        records.extend(batch);
    }
    Ok(records)
}
