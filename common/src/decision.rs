//! ペアごとの判定（Undecided / Yes / No）

use crate::error::{Error, Result};
use crate::types::{CandidatePair, FeedbackEntry, PairKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 重複判定
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    #[default]
    Undecided,
    Yes,
    No,
}

impl Decision {
    /// 選択肢の表示順
    pub const ALL: [Decision; 3] = [Decision::Undecided, Decision::Yes, Decision::No];

    pub fn label(&self) -> &'static str {
        match self {
            Decision::Undecided => "Undecided",
            Decision::Yes => "Yes",
            Decision::No => "No",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Decision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "undecided" | "u" => Ok(Decision::Undecided),
            "yes" | "y" => Ok(Decision::Yes),
            "no" | "n" => Ok(Decision::No),
            _ => Err(Error::InvalidDecision(s.to_string())),
        }
    }
}

/// 判定の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionCounts {
    pub undecided: usize,
    pub yes: usize,
    pub no: usize,
}

/// ペアキー → 判定のマップ
///
/// ペアの表示順を保持し、キーごとに1エントリのみ持つ。
#[derive(Debug, Clone, Default)]
pub struct DecisionSet {
    order: Vec<PairKey>,
    decisions: HashMap<PairKey, Decision>,
}

impl DecisionSet {
    /// 全ペアを Undecided で初期化
    pub fn from_pairs(pairs: &[CandidatePair]) -> Self {
        let mut set = Self::default();
        for pair in pairs {
            let key = pair.key();
            if !set.decisions.contains_key(&key) {
                set.order.push(key.clone());
                set.decisions.insert(key, Decision::Undecided);
            }
        }
        set
    }

    /// 1ペアの判定を更新（他のペアには影響しない）
    pub fn set(&mut self, key: &PairKey, decision: Decision) -> Result<()> {
        match self.decisions.get_mut(key) {
            Some(slot) => {
                *slot = decision;
                Ok(())
            }
            None => Err(Error::UnknownPair(key.to_string())),
        }
    }

    /// 全ペアに同じ判定を設定
    pub fn set_all(&mut self, decision: Decision) {
        for slot in self.decisions.values_mut() {
            *slot = decision;
        }
    }

    pub fn get(&self, key: &PairKey) -> Option<Decision> {
        self.decisions.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// ペア順に (キー, 判定) を列挙
    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, Decision)> {
        self.order
            .iter()
            .map(move |key| (key, self.decisions.get(key).copied().unwrap_or_default()))
    }

    pub fn counts(&self) -> DecisionCounts {
        let mut counts = DecisionCounts::default();
        for (_, decision) in self.iter() {
            match decision {
                Decision::Undecided => counts.undecided += 1,
                Decision::Yes => counts.yes += 1,
                Decision::No => counts.no += 1,
            }
        }
        counts
    }

    /// /feedback 送信用のリストに変換
    pub fn to_feedback(&self) -> Vec<FeedbackEntry> {
        self.iter()
            .map(|(key, decision)| FeedbackEntry {
                id1: key.id1.clone(),
                id2: key.id2.clone(),
                decision,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityId;

    fn pair(id1: i64, id2: i64) -> CandidatePair {
        serde_json::from_value(serde_json::json!({ "id1": id1, "id2": id2 })).unwrap()
    }

    #[test]
    fn test_initialized_undecided() {
        let set = DecisionSet::from_pairs(&[pair(1, 2), pair(3, 4)]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(&PairKey::new(1, 2)), Some(Decision::Undecided));
        assert_eq!(set.get(&PairKey::new(3, 4)), Some(Decision::Undecided));
    }

    #[test]
    fn test_set_leaves_other_pairs_alone() {
        let mut set = DecisionSet::from_pairs(&[pair(1, 2), pair(3, 4)]);
        set.set(&PairKey::new(1, 2), Decision::Yes).unwrap();
        assert_eq!(set.get(&PairKey::new(1, 2)), Some(Decision::Yes));
        assert_eq!(set.get(&PairKey::new(3, 4)), Some(Decision::Undecided));
    }

    #[test]
    fn test_set_unknown_pair() {
        let mut set = DecisionSet::from_pairs(&[pair(1, 2)]);
        let err = set.set(&PairKey::new(2, 1), Decision::No).unwrap_err();
        assert!(matches!(err, Error::UnknownPair(k) if k == "2-1"));
    }

    #[test]
    fn test_set_all_overrides_every_pair() {
        let mut set = DecisionSet::from_pairs(&[pair(1, 2), pair(3, 4)]);
        set.set(&PairKey::new(1, 2), Decision::Yes).unwrap();
        set.set_all(Decision::No);
        assert_eq!(set.counts(), DecisionCounts { undecided: 0, yes: 0, no: 2 });
    }

    #[test]
    fn test_duplicate_pairs_collapse() {
        let set = DecisionSet::from_pairs(&[pair(1, 2), pair(5, 6), pair(1, 2)]);
        assert_eq!(set.len(), 2);
        let keys: Vec<String> = set.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["1-2", "5-6"]);
    }

    #[test]
    fn test_feedback_reflects_last_selection() {
        let mut set = DecisionSet::from_pairs(&[pair(1, 2), pair(3, 4), pair(5, 6)]);
        set.set(&PairKey::new(3, 4), Decision::Yes).unwrap();
        set.set(&PairKey::new(3, 4), Decision::No).unwrap();
        set.set(&PairKey::new(5, 6), Decision::Yes).unwrap();

        let feedback = set.to_feedback();
        assert_eq!(feedback.len(), 3);
        assert_eq!(feedback[0].decision, Decision::Undecided);
        assert_eq!(feedback[1].id1, EntityId::Int(3));
        assert_eq!(feedback[1].decision, Decision::No);
        assert_eq!(feedback[2].decision, Decision::Yes);
        assert_eq!(set.counts(), DecisionCounts { undecided: 1, yes: 1, no: 1 });
    }

    #[test]
    fn test_hyphenated_ids_kept_intact() {
        let pair: CandidatePair = serde_json::from_value(serde_json::json!({
            "id1": "A-1", "id2": "B-2"
        }))
        .unwrap();
        let set = DecisionSet::from_pairs(&[pair]);
        let feedback = set.to_feedback();
        assert_eq!(feedback[0].id1, EntityId::from("A-1"));
        assert_eq!(feedback[0].id2, EntityId::from("B-2"));
    }

    #[test]
    fn test_decision_parse() {
        assert_eq!("yes".parse::<Decision>().unwrap(), Decision::Yes);
        assert_eq!(" N ".parse::<Decision>().unwrap(), Decision::No);
        assert_eq!("Undecided".parse::<Decision>().unwrap(), Decision::Undecided);
        assert!("maybe".parse::<Decision>().is_err());
    }

    #[test]
    fn test_decision_serialized_labels() {
        assert_eq!(serde_json::to_string(&Decision::Undecided).unwrap(), "\"Undecided\"");
        assert_eq!(Decision::ALL.map(|d| d.to_string()), ["Undecided", "Yes", "No"]);
    }
}
