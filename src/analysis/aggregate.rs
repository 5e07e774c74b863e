use super::*;
use crate::records::TrialRecord;
use crate::*;
use anyhow::Context;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Cooperation and payoff series for every (player, epsilon) group.
///
/// Built in one pass over records sorted by (player, epsilon, round,
/// trial), so the result never depends on the order files were read in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    epsilons: Vec<Epsilon>,
    groups: BTreeMap<String, BTreeMap<Epsilon, Series>>,
}

impl Aggregate {
    /// Distinct exploration rates present, ascending.
    pub fn epsilons(&self) -> &[Epsilon] {
        &self.epsilons
    }
    /// Distinct player labels, ascending.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
    pub fn get(&self, player: &str, epsilon: Probability) -> Option<&Series> {
        self.groups
            .get(player)
            .and_then(|by| by.get(&Epsilon::from(epsilon)))
    }
    /// Every group in (player, epsilon) order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, Epsilon, &Series)> {
        self.groups.iter().flat_map(|(player, by)| {
            by.iter()
                .map(move |(epsilon, series)| (player.as_str(), *epsilon, series))
        })
    }
    /// Number of (player, epsilon) groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl TryFrom<&[TrialRecord]> for Aggregate {
    type Error = anyhow::Error;
    fn try_from(records: &[TrialRecord]) -> Result<Self, Self::Error> {
        let mut sorted = records.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| a.cmp_key(b));
        let epsilons = sorted
            .iter()
            .map(|r| Epsilon::from(r.epsilon))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        let mut groups = BTreeMap::<String, BTreeMap<Epsilon, Series>>::new();
        for chunk in sorted.chunk_by(|a, b| {
            a.player == b.player && Epsilon::from(a.epsilon) == Epsilon::from(b.epsilon)
        }) {
            let head = chunk[0];
            let epsilon = Epsilon::from(head.epsilon);
            let grid = Grid::<&TrialRecord>::try_from(chunk)
                .with_context(|| format!("player {} epsilon {}", head.player, epsilon))?;
            log::debug!(
                "{:<12} ε={:<8} {} rounds × {} trials",
                head.player,
                epsilon,
                grid.rounds(),
                grid.trials()
            );
            groups
                .entry(head.player.clone())
                .or_default()
                .insert(epsilon, Series::from(&grid));
        }
        Ok(Self { epsilons, groups })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Action;
    use crate::game::Kind;
    use crate::game::Sweep;
    use crate::game::linspace;

    fn record(player: &str, epsilon: f64, round: usize, trial: usize, action: Action) -> TrialRecord {
        TrialRecord {
            trial,
            round,
            player: player.into(),
            action,
            payoff: 0.0,
            epsilon,
        }
    }

    /// Two players at ε = 0.1, two rounds, two trials.
    fn scenario() -> Vec<TrialRecord> {
        use Action::*;
        let agent1 = [[Cooperate, Defect], [Cooperate, Cooperate]];
        let agent2 = [[Defect, Defect], [Cooperate, Defect]];
        let mut records = Vec::new();
        for (player, actions) in [("agent1", agent1), ("agent2", agent2)] {
            for (r, row) in actions.iter().enumerate() {
                for (t, action) in row.iter().enumerate() {
                    records.push(record(player, 0.1, r + 1, t, *action));
                }
            }
        }
        records.reverse();
        records
    }

    #[test]
    fn scenario_fractions() {
        let aggregate = Aggregate::try_from(scenario().as_slice()).unwrap();
        assert_eq!(aggregate.len(), 2);
        assert_eq!(aggregate.epsilons(), &[Epsilon::from(0.1)]);
        assert_eq!(
            aggregate.players().collect::<Vec<_>>(),
            vec!["agent1", "agent2"]
        );
        let agent1 = aggregate.get("agent1", 0.1).unwrap();
        assert_eq!(agent1.cooperation(), &[0.5, 1.0]);
        let agent2 = aggregate.get("agent2", 0.1).unwrap();
        assert_eq!(agent2.cooperation(), &[0.0, 0.5]);
    }

    #[test]
    fn epsilons_are_sorted_and_distinct() {
        let records = [
            record("p", 0.5, 1, 0, Action::Cooperate),
            record("p", 0.0, 1, 0, Action::Cooperate),
            record("q", 0.5, 1, 0, Action::Defect),
            record("q", 1.0, 1, 0, Action::Defect),
        ];
        let aggregate = Aggregate::try_from(records.as_slice()).unwrap();
        let epsilons = aggregate
            .epsilons()
            .iter()
            .map(|e| e.value())
            .collect::<Vec<_>>();
        assert_eq!(epsilons, vec![0.0, 0.5, 1.0]);
        assert_eq!(aggregate.len(), 4);
        let order = aggregate
            .groups()
            .map(|(p, e, _)| (p.to_string(), e.value()))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                ("p".to_string(), 0.0),
                ("p".to_string(), 0.5),
                ("q".to_string(), 0.5),
                ("q".to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn empty_input_is_empty() {
        let aggregate = Aggregate::try_from(Vec::<TrialRecord>::new().as_slice()).unwrap();
        assert!(aggregate.is_empty());
        assert!(aggregate.epsilons().is_empty());
        assert_eq!(aggregate.groups().count(), 0);
    }

    #[test]
    fn ragged_group_names_player_and_epsilon() {
        let mut records = scenario();
        records.pop();
        let err = Aggregate::try_from(records.as_slice()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("agent1"));
        assert!(message.contains("0.1"));
        assert!(message.contains("shape mismatch"));
    }

    #[test]
    fn simulated_fractions_stay_in_unit_interval() {
        let sweep = Sweep {
            trials: 16,
            rounds: 25,
            epsilons: linspace(0.0, 0.5, 4),
            kind: Kind::Random,
            ..Sweep::default()
        };
        let records = (0..sweep.trials)
            .flat_map(|t| (0..sweep.epsilons.len()).map(move |e| (t, e)))
            .flat_map(|(t, e)| sweep.game(t, e).simulate(sweep.rounds))
            .collect::<Vec<_>>();
        let aggregate = Aggregate::try_from(records.as_slice()).unwrap();
        assert_eq!(aggregate.len(), 2 * 4);
        for (_, _, series) in aggregate.groups() {
            assert_eq!(series.rounds(), 25);
            assert!(series.cooperation().iter().all(|c| (0.0..=1.0).contains(c)));
            assert!(series.payoff().iter().all(|p| (0.0..=5.0).contains(p)));
        }
    }
}
