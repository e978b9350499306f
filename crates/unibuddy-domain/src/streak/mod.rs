mod calculator;


pub use calculator::{compute_streaks, StreakSummary};
