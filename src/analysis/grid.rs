use crate::records::TrialRecord;

/// Dense rounds × trials layout of one (player, epsilon) group.
///
/// Row `r` holds round `r + 1`; column `t` holds trial `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rounds: usize,
    trials: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn row(&self, index: usize) -> &[T] {
        &self.cells[index * self.trials..(index + 1) * self.trials]
    }
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.trials)
    }
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            rounds: self.rounds,
            trials: self.trials,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

/// Places every record at (round, trial).
///
/// The shape is `max(round)` × `max(trial) + 1`. A round of 0, a repeated
/// cell, an empty cell, or a record count that differs from the shape is a
/// shape mismatch. The count is checked before any cell is allocated.
impl<'a> TryFrom<&[&'a TrialRecord]> for Grid<&'a TrialRecord> {
    type Error = anyhow::Error;
    fn try_from(records: &[&'a TrialRecord]) -> Result<Self, Self::Error> {
        let rounds = records.iter().map(|r| r.round).max().unwrap_or(0);
        let trials = records
            .iter()
            .map(|r| r.trial.checked_add(1))
            .try_fold(0, |max, t| t.map(|t| max.max(t)))
            .ok_or_else(|| anyhow::anyhow!("shape mismatch: trial index overflows"))?;
        let size = rounds.checked_mul(trials).ok_or_else(|| {
            anyhow::anyhow!("shape mismatch: {} × {} grid overflows", rounds, trials)
        })?;
        if size == 0 {
            anyhow::bail!("shape mismatch: empty group");
        }
        if size != records.len() {
            anyhow::bail!(
                "shape mismatch: {} records cannot fill a {} × {} grid",
                records.len(),
                rounds,
                trials
            );
        }
        let mut cells = vec![None; size];
        for record in records.iter().copied() {
            if record.round == 0 {
                anyhow::bail!("shape mismatch: round 0 in trial {}", record.trial);
            }
            let ref mut cell = cells[(record.round - 1) * trials + record.trial];
            if cell.replace(record).is_some() {
                anyhow::bail!(
                    "shape mismatch: round {} trial {} appears twice",
                    record.round,
                    record.trial
                );
            }
        }
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| {
                cell.ok_or_else(|| {
                    anyhow::anyhow!(
                        "shape mismatch: round {} trial {} missing from {} × {} grid",
                        i / trials + 1,
                        i % trials,
                        rounds,
                        trials
                    )
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            rounds,
            trials,
            cells,
        })
    }
}
