//! Extracts per-day activity records from the fetched markup.
//!
//! The contributions page is scanned with an ordered list of patterns
//! rather than parsed as a document tree: GitHub has shuffled the attribute
//! order of the day `<rect>` elements before, and a pattern list makes the
//! next drift a one-line addition instead of a restructure.

use regex::Regex;

use crate::{Error, Result};

/// One day of activity as reported by the contributions page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    /// Calendar date in the page's own string form (e.g. `2026-08-23`)
    pub date: String,
    /// Contribution count; malformed counts coerce to 0
    pub count: u32,
}

/// A single extraction strategy: a pattern plus the capture-group indices
/// holding the date and count.
struct Strategy {
    pattern: Regex,
    date_group: usize,
    count_group: usize,
}

/// Strategies in the order they are attempted. The first one to produce a
/// non-empty record list wins.
fn strategies() -> Vec<Strategy> {
    vec![
        // Current markup: date, then count, then fill attributes
        Strategy {
            pattern: Regex::new(
                r#"<rect[^>]*data-date="([^"]+)"[^>]*data-count="([^"]+)"[^>]*fill="([^"]+)"[^>]*/>"#,
            )
            .unwrap(),
            date_group: 1,
            count_group: 2,
        },
        // Older markup put the count first
        Strategy {
            pattern: Regex::new(r#"<rect[^>]*data-count="([^"]+)"[^>]*data-date="([^"]+)"[^>]*/>"#)
                .unwrap(),
            date_group: 2,
            count_group: 1,
        },
    ]
}

/// Scan the markup for day records, in document order.
///
/// Document order is assumed to already be chronological (week by week),
/// which is what the layout stage relies on. Fails with
/// [`Error::Extraction`] only when every strategy comes up empty.
pub fn extract_days(html: &str) -> Result<Vec<DayRecord>> {
    for (i, strategy) in strategies().into_iter().enumerate() {
        let days: Vec<DayRecord> = strategy
            .pattern
            .captures_iter(html)
            .map(|caps| DayRecord {
                date: caps[strategy.date_group].to_string(),
                count: caps[strategy.count_group].parse().unwrap_or(0),
            })
            .collect();

        if !days.is_empty() {
            if i > 0 {
                log::warn!("primary pattern matched nothing, strategy {} recognized the markup", i + 1);
            }
            return Ok(days);
        }
    }

    Err(Error::Extraction)
}
