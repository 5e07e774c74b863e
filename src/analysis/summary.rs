use super::*;
use crate::*;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

/// One round of one group in a summary export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow<'a> {
    pub player: &'a str,
    pub epsilon: Probability,
    pub round: usize,
    pub payoff: Utility,
    pub cooperation: Probability,
}

impl Aggregate {
    /// Flattens every series into rows, 1-based round.
    pub fn rows(&self) -> impl Iterator<Item = SummaryRow<'_>> {
        self.groups().flat_map(|(player, epsilon, series)| {
            series
                .payoff()
                .iter()
                .zip(series.cooperation())
                .enumerate()
                .map(move |(i, (payoff, cooperation))| SummaryRow {
                    player,
                    epsilon: epsilon.value(),
                    round: i + 1,
                    payoff: *payoff,
                    cooperation: *cooperation,
                })
        })
    }

    /// Writes `player,epsilon,round,payoff,cooperation` rows as CSV.
    pub fn export(&self, path: &Path) -> anyhow::Result<()> {
        let mut writer =
            csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
        for row in self.rows() {
            writer
                .serialize(row)
                .with_context(|| format!("write {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("flush {}", path.display()))?;
        log::info!("wrote summary of {} groups to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Action;
    use crate::records::TrialRecord;

    #[test]
    fn export_writes_one_row_per_round() {
        let records = (1..=3)
            .map(|round| TrialRecord {
                trial: 0,
                round,
                player: "Player 1".into(),
                action: Action::Cooperate,
                payoff: 3.0,
                epsilon: 0.05,
            })
            .collect::<Vec<_>>();
        let aggregate = Aggregate::try_from(records.as_slice()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        aggregate.export(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "player,epsilon,round,payoff,cooperation");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "Player 1,0.05,3,3.0,1.0");
    }
}
