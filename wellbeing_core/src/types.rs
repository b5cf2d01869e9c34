//! Core domain types for the wellbeing journal.
//!
//! This module defines:
//! - Mood records and their display format
//! - Descriptive mood levels derived from a rating
//! - The append-only mood history owned by a session

use std::fmt;

/// Lowest accepted mood rating
pub const MIN_RATING: i32 = 1;

/// Highest accepted mood rating
pub const MAX_RATING: i32 = 10;

/// Stored in place of an empty note
pub const NO_NOTE: &str = "No note";

// ============================================================================
// Mood Record
// ============================================================================

/// A single logged mood entry
///
/// Records are immutable once built. The constructor trusts its inputs:
/// keeping `rating` inside [`MIN_RATING`, `MAX_RATING`] is the caller's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoodRecord {
    rating: i32,
    date: String,
    note: String,
}

impl MoodRecord {
    pub fn new(rating: i32, date: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            rating,
            date: date.into(),
            note: note.into(),
        }
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn level(&self) -> MoodLevel {
        MoodLevel::from_rating(self.rating)
    }
}

impl fmt::Display for MoodRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {} | Mood Rating: {}/10 | Note: {}",
            self.date, self.rating, self.note
        )
    }
}

// ============================================================================
// Mood Level
// ============================================================================

/// Descriptive band for a rating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoodLevel {
    VeryLow,
    Low,
    Okay,
    Good,
    Excellent,
}

impl MoodLevel {
    pub fn from_rating(rating: i32) -> Self {
        match rating {
            r if r >= 9 => MoodLevel::Excellent,
            7..=8 => MoodLevel::Good,
            5..=6 => MoodLevel::Okay,
            3..=4 => MoodLevel::Low,
            _ => MoodLevel::VeryLow,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MoodLevel::VeryLow => "Very Low",
            MoodLevel::Low => "Low",
            MoodLevel::Okay => "Okay",
            MoodLevel::Good => "Good",
            MoodLevel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ============================================================================
// Mood History
// ============================================================================

/// Ordered, append-only log of mood records
///
/// Insertion order is the order entries were logged. There is no way to
/// edit or remove an entry once pushed.
#[derive(Clone, Debug, Default)]
pub struct MoodHistory {
    records: Vec<MoodRecord>,
}

impl MoodHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoodRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoodRecord> {
        self.records.iter()
    }

    /// Arithmetic mean of all ratings, `None` when nothing has been logged
    pub fn average(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: i64 = self.records.iter().map(|r| i64::from(r.rating)).sum();
        Some(total as f64 / self.records.len() as f64)
    }

    /// Average rounded half-up to one decimal, e.g. `"6.3"` for 6.25
    pub fn average_display(&self) -> Option<String> {
        self.average()
            .map(|avg| format!("{:.1}", (avg * 10.0).round() / 10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(ratings: &[i32]) -> MoodHistory {
        let mut history = MoodHistory::new();
        for (i, rating) in ratings.iter().enumerate() {
            history.push(MoodRecord::new(*rating, format!("day-{}", i), NO_NOTE));
        }
        history
    }

    #[test]
    fn test_record_display() {
        let record = MoodRecord::new(7, "2025-10-09", "feeling okay");
        assert_eq!(
            record.to_string(),
            "Date: 2025-10-09 | Mood Rating: 7/10 | Note: feeling okay"
        );
    }

    #[test]
    fn test_record_accessors() {
        let record = MoodRecord::new(3, "", NO_NOTE);
        assert_eq!(record.rating(), 3);
        assert_eq!(record.date(), "");
        assert_eq!(record.note(), "No note");
        assert_eq!(record.level(), MoodLevel::Low);
    }

    #[test]
    fn test_mood_levels() {
        assert_eq!(MoodLevel::from_rating(1), MoodLevel::VeryLow);
        assert_eq!(MoodLevel::from_rating(2), MoodLevel::VeryLow);
        assert_eq!(MoodLevel::from_rating(4), MoodLevel::Low);
        assert_eq!(MoodLevel::from_rating(5), MoodLevel::Okay);
        assert_eq!(MoodLevel::from_rating(8), MoodLevel::Good);
        assert_eq!(MoodLevel::from_rating(10), MoodLevel::Excellent);
        assert_eq!(MoodLevel::VeryLow.to_string(), "Very Low");
    }

    #[test]
    fn test_empty_history_has_no_average() {
        let history = MoodHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.average(), None);
        assert_eq!(history.average_display(), None);
    }

    #[test]
    fn test_average() {
        let history = history_of(&[4, 8, 6]);
        assert_eq!(history.average(), Some(6.0));
        assert_eq!(history.average_display().as_deref(), Some("6.0"));
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 25 / 4 = 6.25
        let history = history_of(&[6, 7, 6, 6]);
        assert_eq!(history.average_display().as_deref(), Some("6.3"));

        // 20 / 3 = 6.666...
        let history = history_of(&[6, 7, 7]);
        assert_eq!(history.average_display().as_deref(), Some("6.7"));
    }

    #[test]
    fn test_history_keeps_insertion_order() {
        let history = history_of(&[9, 2, 5]);
        let ratings: Vec<i32> = history.iter().map(|r| r.rating()).collect();
        assert_eq!(ratings, vec![9, 2, 5]);
        assert_eq!(history.len(), 3);
    }
}
