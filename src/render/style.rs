use std::collections::BTreeMap;

/// How a player's series is stroked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Labels containing a `1` are dashed; everything else is solid.
impl From<&str> for LineStyle {
    fn from(player: &str) -> Self {
        if player.contains('1') {
            Self::Dashed
        } else {
            Self::Solid
        }
    }
}

/// Explicit player → style assignments.
///
/// Players without an entry fall back to [`LineStyle::from`] on their label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable(BTreeMap<String, LineStyle>);

impl StyleTable {
    pub fn insert(&mut self, player: impl Into<String>, style: LineStyle) {
        self.0.insert(player.into(), style);
    }
    pub fn style(&self, player: &str) -> LineStyle {
        self.0
            .get(player)
            .copied()
            .unwrap_or_else(|| LineStyle::from(player))
    }
}

impl<S: Into<String>> FromIterator<(S, LineStyle)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (S, LineStyle)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(p, s)| (p.into(), s)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_labels() {
        assert_eq!(LineStyle::from("agent1"), LineStyle::Dashed);
        assert_eq!(LineStyle::from("agent2"), LineStyle::Solid);
        assert_eq!(LineStyle::from("Player 1"), LineStyle::Dashed);
        assert_eq!(LineStyle::from("Player 2"), LineStyle::Solid);
    }

    #[test]
    fn explicit_entries_win() {
        let table = [("agent12", LineStyle::Solid), ("agent2", LineStyle::Dashed)]
            .into_iter()
            .collect::<StyleTable>();
        assert_eq!(table.style("agent12"), LineStyle::Solid);
        assert_eq!(table.style("agent2"), LineStyle::Dashed);
        assert_eq!(table.style("agent1"), LineStyle::Dashed);
        assert_eq!(table.style("agent3"), LineStyle::Solid);
    }
}
