//! Request year window.

use chrono::NaiveDate;

/// The year window sent with a fetch request.
///
/// The source is asked for `[current_year - 1, current_year]`, computed at
/// call time; history beyond that rolling two-year window is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    /// First year requested (inclusive).
    pub start: i32,
    /// Last year requested (inclusive).
    pub end: i32,
}

impl YearWindow {
    /// Creates the rolling two-year window ending in `end` year.
    #[must_use]
    pub const fn ending(end: i32) -> Self {
        Self {
            start: end - 1,
            end,
        }
    }

    /// Creates the window for the year containing `today`.
    #[must_use]
    pub fn for_date(today: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::ending(today.year())
    }
}

impl std::fmt::Display for YearWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ending() {
        let window = YearWindow::ending(2024);
        assert_eq!(window.start, 2023);
        assert_eq!(window.end, 2024);
    }

    #[test]
    fn test_for_date() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(YearWindow::for_date(today), YearWindow::ending(2025));
    }

    #[test]
    fn test_display() {
        assert_eq!(YearWindow::ending(2024).to_string(), "2023-2024");
    }
}
