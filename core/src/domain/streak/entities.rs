use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Consecutive-day upload counters of one user.
///
/// `longest_streak >= current_streak` holds after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserStreakState {
    pub user_id: Uuid,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Calendar day of the last upload
    pub last_upload_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTransition {
    Started,
    AlreadyCounted,
    Extended,
    Reset,
}

impl UserStreakState {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            current_streak: 0,
            longest_streak: 0,
            last_upload_date: None,
        }
    }

    /// State after an upload on `today`.
    pub fn record_upload(&self, today: NaiveDate) -> (Self, StreakTransition) {
        let Some(last) = self.last_upload_date else {
            let state = Self {
                user_id: self.user_id,
                current_streak: 1,
                longest_streak: self.longest_streak.max(1),
                last_upload_date: Some(today),
            };
            return (state, StreakTransition::Started);
        };

        // a stored day after `today` only happens with clock changes; leave it alone
        if last >= today {
            return (self.clone(), StreakTransition::AlreadyCounted);
        }

        if today.pred_opt() == Some(last) {
            let current_streak = self.current_streak.saturating_add(1);
            let state = Self {
                user_id: self.user_id,
                current_streak,
                longest_streak: self.longest_streak.max(current_streak),
                last_upload_date: Some(today),
            };
            return (state, StreakTransition::Extended);
        }

        let state = Self {
            user_id: self.user_id,
            current_streak: 1,
            longest_streak: self.longest_streak.max(1),
            last_upload_date: Some(today),
        };
        (state, StreakTransition::Reset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_upload_date: Option<NaiveDate>,
    pub message: Option<String>,
}

impl From<UserStreakState> for UserStats {
    fn from(state: UserStreakState) -> Self {
        Self {
            current_streak: state.current_streak,
            longest_streak: state.longest_streak,
            last_upload_date: state.last_upload_date,
            message: encouragement_message(state.current_streak).map(str::to_string),
        }
    }
}

pub fn encouragement_message(current_streak: u32) -> Option<&'static str> {
    match current_streak {
        0 => None,
        1 => Some("Great start! Keep it going tomorrow! 💪"),
        2..=6 => Some("You're building momentum! 🚀"),
        7..=13 => Some("One week down! You're on fire! 🔥"),
        14..=29 => Some("Two weeks strong! Consistency is key! ⭐"),
        _ => Some("Amazing dedication! You're unstoppable! 🎉"),
    }
}
