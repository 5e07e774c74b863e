use serde::Deserialize;
use serde::Serialize;

/// A single move in the dilemma.
///
/// Serialized as `C` and `D` in trial logs.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "C")]
    Cooperate,
    #[serde(rename = "D")]
    Defect,
}

impl Action {
    /// The opposite move.
    pub fn flip(self) -> Self {
        match self {
            Self::Cooperate => Self::Defect,
            Self::Defect => Self::Cooperate,
        }
    }
    pub fn is_cooperate(&self) -> bool {
        matches!(self, Self::Cooperate)
    }
}

/// Row/column index into a payoff matrix.
impl From<Action> for usize {
    fn from(action: Action) -> Self {
        match action {
            Action::Cooperate => 0,
            Action::Defect => 1,
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "C" => Ok(Self::Cooperate),
            "D" => Ok(Self::Defect),
            _ => Err(anyhow::anyhow!("invalid action: {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Cooperate => write!(f, "C"),
            Self::Defect => write!(f, "D"),
        }
    }
}
