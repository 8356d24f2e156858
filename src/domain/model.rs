use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 一顆號碼球 (1..=45)
pub type Number = u8;

/// One played or recommended combination.
pub type NumberSet = Vec<Number>;

pub const MIN_NUMBER: Number = 1;
pub const MAX_NUMBER: Number = 45;
pub const SET_SIZE: usize = 6;

/// Number sets decoded from a single scanned ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayedSets(Vec<NumberSet>);

impl PlayedSets {
    pub fn new(sets: Vec<NumberSet>) -> Self {
        Self(sets)
    }

    pub fn sets(&self) -> &[NumberSet] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 所有已玩過的號碼 (可能重複)
    pub fn numbers(&self) -> impl Iterator<Item = Number> + '_ {
        self.0.iter().flatten().copied()
    }
}

/// Unplayed numbers, strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pool(Vec<Number>);

impl Pool {
    /// Caller guarantees `numbers` is ascending and duplicate-free.
    pub(crate) fn from_sorted(numbers: Vec<Number>) -> Self {
        Self(numbers)
    }

    pub fn as_slice(&self) -> &[Number] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, number: Number) -> bool {
        self.0.binary_search(&number).is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[serde(alias = "normal")]
    #[cfg_attr(feature = "cli", value(alias = "normal"))]
    Ordered,
    #[default]
    #[serde(alias = "groupShuffle")]
    #[cfg_attr(feature = "cli", value(alias = "groupShuffle"))]
    GroupShuffle,
    #[serde(alias = "shuffe")]
    #[cfg_attr(feature = "cli", value(alias = "shuffe"))]
    Shuffle,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Ordered => "ordered",
            Strategy::GroupShuffle => "group-shuffle",
            Strategy::Shuffle => "shuffle",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ordered" | "normal" => Ok(Strategy::Ordered),
            "group-shuffle" | "groupShuffle" => Ok(Strategy::GroupShuffle),
            "shuffle" | "shuffe" => Ok(Strategy::Shuffle),
            other => Err(format!(
                "unknown strategy '{}' (expected ordered, group-shuffle or shuffle)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub played: PlayedSets,
    pub set_count: usize,
    pub strategy: Strategy,
}

/// Everything the display layer shows after a scan or a regenerate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy: Strategy,
    pub played: PlayedSets,
    pub pool: Pool,
    /// 每組已由小到大排序
    pub sets: Vec<NumberSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_and_aliases() {
        assert_eq!("ordered".parse::<Strategy>().unwrap(), Strategy::Ordered);
        assert_eq!("normal".parse::<Strategy>().unwrap(), Strategy::Ordered);
        assert_eq!(
            "groupShuffle".parse::<Strategy>().unwrap(),
            Strategy::GroupShuffle
        );
        assert_eq!("shuffe".parse::<Strategy>().unwrap(), Strategy::Shuffle);
        assert!("random".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::GroupShuffle);
        assert_eq!(Strategy::GroupShuffle.to_string(), "group-shuffle");
    }

    #[test]
    fn test_strategy_serde_aliases() {
        let s: Strategy = serde_json::from_str("\"groupShuffle\"").unwrap();
        assert_eq!(s, Strategy::GroupShuffle);
        assert_eq!(
            serde_json::to_string(&Strategy::Shuffle).unwrap(),
            "\"shuffle\""
        );
    }

    #[test]
    fn test_played_sets_numbers_flatten() {
        let played = PlayedSets::new(vec![vec![1, 2, 3, 4, 5, 6], vec![6, 7, 8, 9, 10, 11]]);
        assert_eq!(played.len(), 2);
        assert_eq!(played.numbers().count(), 12);
    }
}
