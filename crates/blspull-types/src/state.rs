//! Fetch-state record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Record of the last successful fetch.
///
/// Serialized as `{"last_fetch":"YYYY-MM-DD"}`. Absent until the first
/// successful fetch, overwritten on every later one, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchState {
    /// Calendar date of the last successful fetch.
    pub last_fetch: NaiveDate,
}

impl FetchState {
    /// Creates a fetch state recorded on the given date.
    #[must_use]
    pub const fn new(last_fetch: NaiveDate) -> Self {
        Self { last_fetch }
    }

    /// Whole days elapsed between the recorded fetch and `today`.
    #[must_use]
    pub fn age_days(&self, today: NaiveDate) -> i64 {
        (today - self.last_fetch).num_days()
    }
}

/// What the state store found on disk.
///
/// Missing or unreadable state is an ordinary condition, not an error: both
/// degrade to "a fetch is due".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSnapshot {
    /// A well-formed state record.
    Present(FetchState),
    /// No state has been written yet.
    Absent,
    /// A state file exists but could not be interpreted.
    Invalid,
}

impl StateSnapshot {
    /// Returns the recorded state, if present and well-formed.
    #[must_use]
    pub const fn state(&self) -> Option<FetchState> {
        match self {
            Self::Present(state) => Some(*state),
            Self::Absent | Self::Invalid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_days() {
        let state = FetchState::new(date(2024, 1, 1));
        assert_eq!(state.age_days(date(2024, 1, 1)), 0);
        assert_eq!(state.age_days(date(2024, 1, 31)), 30);
        assert_eq!(state.age_days(date(2023, 12, 31)), -1);
    }

    #[test]
    fn test_state_json_shape() {
        let state = FetchState::new(date(2024, 3, 5));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"last_fetch":"2024-03-05"}"#);

        let back: FetchState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_snapshot_state() {
        let state = FetchState::new(date(2024, 3, 5));
        assert_eq!(StateSnapshot::Present(state).state(), Some(state));
        assert_eq!(StateSnapshot::Absent.state(), None);
        assert_eq!(StateSnapshot::Invalid.state(), None);
    }
}
