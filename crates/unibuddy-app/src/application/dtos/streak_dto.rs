use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_activity_days: u32,
    pub last_activity_date: Option<String>, // ISO 8601 date (YYYY-MM-DD)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDayDto {
    pub date: String, // YYYY-MM-DD
    pub has_activity: bool,
    pub activity_count: u32,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityCalendarDto {
    pub year: i32,
    pub month: u32,
    pub days: Vec<ActivityDayDto>,
    pub month_stats: MonthStatsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthStatsDto {
    pub total_days: u32,
    pub active_days: u32,
    pub activity_rate: f64, // percent of days with an activity (0.0 - 100.0)
    pub total_activities: u32,
}
