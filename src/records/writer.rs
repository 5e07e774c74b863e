use super::*;
use anyhow::Context;
use std::path::Path;

/// Writes records as CSV with a `trial,round,player,action,payoff,epsilon` header.
pub fn write(path: &Path, records: &[TrialRecord]) -> anyhow::Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}
