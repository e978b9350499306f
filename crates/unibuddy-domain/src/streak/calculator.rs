use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Result of a streak scan over the activity history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_activity_days: u32,
    pub last_activity_date: Option<NaiveDate>,
}

impl StreakSummary {
    fn empty() -> Self {
        Self {
            current_streak: 0,
            longest_streak: 0,
            total_activity_days: 0,
            last_activity_date: None,
        }
    }
}

/// Compute the current and longest consecutive-day streaks for a set of
/// activity dates.
///
/// The current streak is the run of adjacent calendar days ending at `today`
/// or yesterday; if the most recent activity is older than that, the streak
/// has lapsed and the current streak is 0. The longest streak is the best
/// run anywhere in the history.
///
/// `today` is the reference day for the lapse rule. Callers obtain it from a
/// [`Clock`](crate::shared::Clock) at the moment of the query, so the same
/// input can legitimately yield a different current streak after midnight.
///
/// Input order does not matter; duplicates are ignored. Total over any
/// input - there is no failure mode.
pub fn compute_streaks(dates: &[NaiveDate], today: NaiveDate) -> StreakSummary {
    if dates.is_empty() {
        return StreakSummary::empty();
    }

    let mut sorted: Vec<NaiveDate> = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut longest_streak = 0u32;
    let mut current_run = 0u32;
    for (i, date) in sorted.iter().enumerate() {
        if i > 0 && (*date - sorted[i - 1]).num_days() == 1 {
            current_run += 1;
        } else {
            current_run = 1;
        }
        longest_streak = longest_streak.max(current_run);
    }

    let last = sorted[sorted.len() - 1];
    let yesterday = today - Duration::days(1);

    let mut current_streak = 0u32;
    if last == today || last == yesterday {
        current_streak = 1;
        for i in (0..sorted.len() - 1).rev() {
            if (sorted[i + 1] - sorted[i]).num_days() == 1 {
                current_streak += 1;
            } else {
                break;
            }
        }
    }

    StreakSummary {
        current_streak,
        longest_streak,
        total_activity_days: sorted.len() as u32,
        last_activity_date: Some(last),
    }
}
