//! Aggregate reading statistics.

use serde::Serialize;

use super::Book;

/// Reading progress over a whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadingProgress {
    /// Number of books in the collection
    pub total: usize,
    /// Number of books marked as read
    #[serde(rename = "read")]
    pub read_count: usize,
    /// Share of read books in percent (0.0 for an empty collection)
    pub percent: f64,
}

impl ReadingProgress {
    /// Computes progress for a collection.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read_count = books.iter().filter(|book| book.read).count();
        let percent = if total == 0 {
            0.0
        } else {
            100.0 * read_count as f64 / total as f64
        };

        Self {
            total,
            read_count,
            percent,
        }
    }

    /// Completion as a ratio in `0.0..=1.0`, for gauges.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        (self.percent / 100.0).clamp(0.0, 1.0)
    }

    /// Completion formatted with two decimals, e.g. `50.00%`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.2}%", self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(read: bool) -> Book {
        Book::new("T", "A", "2000", "G", read)
    }

    #[test]
    fn test_empty_collection() {
        let progress = ReadingProgress::from_books(&[]);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.read_count, 0);
        assert!(progress.percent.abs() < f64::EPSILON);
        assert!(progress.ratio().abs() < f64::EPSILON);
    }

    #[test]
    fn test_half_read() {
        let progress = ReadingProgress::from_books(&[book(true), book(false)]);
        assert_eq!(progress.total, 2);
        assert_eq!(progress.read_count, 1);
        assert!((progress.percent - 50.0).abs() < f64::EPSILON);
        assert_eq!(progress.percent_label(), "50.00%");
    }

    #[test]
    fn test_percent_label_rounds() {
        let progress = ReadingProgress::from_books(&[book(true), book(false), book(false)]);
        assert_eq!(progress.percent_label(), "33.33%");
    }
}
