pub mod card;
pub mod details_modal;
pub mod filters;
pub mod leaderboard_modal;
pub mod pagination;
pub mod registration_modal;
pub mod stats;

use chrono::{DateTime, Utc};

/// `01 Mar 2025, 18:00 UTC`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d %b %Y, %H:%M UTC").to_string()
}
