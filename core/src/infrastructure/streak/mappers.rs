use crate::{domain::streak::entities::UserStreakState, entity::user_streaks};

impl From<&user_streaks::Model> for UserStreakState {
    fn from(model: &user_streaks::Model) -> Self {
        Self {
            user_id: model.user_id,
            current_streak: u32::try_from(model.current_streak).unwrap_or(0),
            longest_streak: u32::try_from(model.longest_streak).unwrap_or(0),
            last_upload_date: model.last_upload_date,
        }
    }
}

impl From<user_streaks::Model> for UserStreakState {
    fn from(model: user_streaks::Model) -> Self {
        Self::from(&model)
    }
}
