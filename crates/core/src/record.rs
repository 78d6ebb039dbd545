//! Score records, the top-10 rankings table and the leaderboard.
//!
//! Records serialize with the same keys the on-disk files have always used:
//! `duration` is integer nanoseconds and `date` an RFC 3339 timestamp.

use std::time::Duration;

use arrayvec::ArrayVec;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::types::MAX_RANKINGS;

/// Final statistics of one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    #[serde(with = "duration_nanos")]
    pub duration: Duration,
    pub date: DateTime<Local>,
    #[serde(default)]
    pub jump_count: u32,
    /// Smallest row reached (see [`RunStats`](crate::RunStats))
    #[serde(default)]
    pub max_height: i32,
    /// Largest row reached
    #[serde(default)]
    pub min_height: i32,
    #[serde(default)]
    pub avg_height: f64,
    #[serde(default)]
    pub difficulty: String,
}

impl ScoreRecord {
    /// Ordering used by the rankings: higher score first, then faster run
    fn ranks_before(&self, other: &ScoreRecord) -> bool {
        self.score > other.score || (self.score == other.score && self.duration < other.duration)
    }
}

mod duration_nanos {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let nanos = i64::deserialize(d)?;
        Ok(Duration::from_nanos(nanos.max(0) as u64))
    }
}

/// Top runs, best first, never more than [`MAX_RANKINGS`] entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ScoreRecord>", into = "Vec<ScoreRecord>")]
pub struct Rankings {
    entries: ArrayVec<ScoreRecord, MAX_RANKINGS>,
}

impl Rankings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record and return its 1-based rank.
    ///
    /// Returns 0 and leaves the table untouched when the record ranks below
    /// every entry of a full table. Records tying an existing entry on both
    /// score and duration go after it.
    pub fn insert(&mut self, record: ScoreRecord) -> usize {
        let pos = self
            .entries
            .iter()
            .position(|e| record.ranks_before(e))
            .unwrap_or(self.entries.len());

        if pos >= MAX_RANKINGS {
            return 0;
        }
        if self.entries.is_full() {
            self.entries.pop();
        }
        self.entries.insert(pos, record);
        pos + 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[ScoreRecord] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreRecord> {
        self.entries.iter()
    }
}

impl From<Vec<ScoreRecord>> for Rankings {
    /// Sort and truncate records loaded from elsewhere
    fn from(mut records: Vec<ScoreRecord>) -> Self {
        records.sort_by(|a, b| b.score.cmp(&a.score).then(a.duration.cmp(&b.duration)));
        records.truncate(MAX_RANKINGS);
        Self {
            entries: records.into_iter().collect(),
        }
    }
}

impl From<Rankings> for Vec<ScoreRecord> {
    fn from(value: Rankings) -> Self {
        value.entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Rankings {
    type Item = &'a ScoreRecord;
    type IntoIter = std::slice::Iter<'a, ScoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Persisted best run plus the rankings table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    pub high_score: Option<ScoreRecord>,
    pub rankings: Rankings,
}

impl Leaderboard {
    /// Best score so far (0 when nothing was recorded)
    pub fn best_score(&self) -> u32 {
        self.high_score.as_ref().map_or(0, |h| h.score)
    }

    /// Strictly beats the stored high score
    pub fn is_new_high_score(&self, score: u32) -> bool {
        score > self.best_score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(score: u32, duration_ms: u64) -> ScoreRecord {
        ScoreRecord {
            score,
            duration: Duration::from_millis(duration_ms),
            date: Local.timestamp_opt(1_700_000_000, 0).unwrap(),
            jump_count: 0,
            max_height: 0,
            min_height: 0,
            avg_height: 0.0,
            difficulty: "Normal".to_string(),
        }
    }

    fn keys(r: &Rankings) -> Vec<(u32, u64)> {
        r.iter()
            .map(|e| (e.score, e.duration.as_millis() as u64))
            .collect()
    }

    #[test]
    fn test_insert_orders_by_score_then_duration() {
        let mut r = Rankings::new();
        assert_eq!(r.insert(record(5, 1000)), 1);
        assert_eq!(r.insert(record(9, 3000)), 1);
        assert_eq!(r.insert(record(5, 500)), 2);
        assert_eq!(r.insert(record(7, 100)), 2);
        assert_eq!(keys(&r), vec![(9, 3000), (7, 100), (5, 500), (5, 1000)]);
    }

    #[test]
    fn test_equal_keys_go_after_existing() {
        let mut r = Rankings::new();
        r.insert(record(4, 100));
        assert_eq!(r.insert(record(4, 100)), 2);
    }

    #[test]
    fn test_truncates_to_ten() {
        let mut r = Rankings::new();
        for s in 1..=15 {
            r.insert(record(s, 1000));
            assert!(r.len() <= MAX_RANKINGS);
        }
        assert_eq!(r.len(), MAX_RANKINGS);
        assert_eq!(r.as_slice()[0].score, 15);
        assert_eq!(r.as_slice()[9].score, 6);
    }

    #[test]
    fn test_low_score_leaves_full_table_unchanged() {
        let mut r = Rankings::new();
        for s in 10..20 {
            r.insert(record(s, 1000));
        }
        let before = r.clone();
        assert_eq!(r.insert(record(3, 10)), 0);
        assert_eq!(r, before);

        // Same score as the last entry but slower: still out.
        assert_eq!(r.insert(record(10, 2000)), 0);
        assert_eq!(r, before);
    }

    #[test]
    fn test_from_vec_sorts_and_truncates() {
        let records: Vec<_> = (0..14).map(|s| record(s, 100 + s as u64)).collect();
        let r = Rankings::from(records);
        assert_eq!(r.len(), MAX_RANKINGS);
        assert_eq!(r.as_slice()[0].score, 13);
        assert_eq!(r.as_slice()[9].score, 4);
    }

    #[test]
    fn test_leaderboard_new_high_score() {
        let mut lb = Leaderboard::default();
        assert_eq!(lb.best_score(), 0);
        assert!(!lb.is_new_high_score(0));
        assert!(lb.is_new_high_score(1));

        lb.high_score = Some(record(8, 1000));
        assert!(!lb.is_new_high_score(8));
        assert!(lb.is_new_high_score(9));
    }

    #[test]
    fn test_record_json_keys() {
        let rec = record(3, 1500);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["score"], 3);
        assert_eq!(json["duration"], 1_500_000_000u64);
        assert_eq!(json["difficulty"], "Normal");
        assert!(json["date"].is_string());
        assert!(json.get("jump_count").is_some());
        assert!(json.get("avg_height").is_some());
    }

    #[test]
    fn test_rankings_serialize_as_array() {
        let mut r = Rankings::new();
        r.insert(record(2, 10));
        r.insert(record(1, 10));
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.starts_with('['));

        let back: Rankings = serde_json::from_str(&json).unwrap();
        assert_eq!(keys(&back), vec![(2, 10), (1, 10)]);
    }
}
