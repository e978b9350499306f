mod forum_dto;
mod profile_dto;
mod reminder_dto;
mod streak_dto;

pub use forum_dto::ForumMessageDto;
pub use profile_dto::{PreferencesDto, ProfileDto, UpdateProfileInput, UserDto};
pub use reminder_dto::ReminderDto;
pub use streak_dto::{ActivityCalendarDto, ActivityDayDto, MonthStatsDto, StreakDto};
