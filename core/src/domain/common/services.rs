use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::domain::common::calendar::Calendar;

/// Application service holding every port the domain talks to.
///
/// Domain operations are implemented as traits on this struct in each
/// domain module's `services.rs`.
pub struct Service<P, M, S, W, A, I, CL> {
    pub(crate) profile_repository: Arc<P>,
    pub(crate) meal_repository: Arc<M>,
    pub(crate) streak_repository: Arc<S>,
    pub(crate) weekly_stat_repository: Arc<W>,
    pub(crate) analysis_client: Arc<A>,
    pub(crate) image_store: Arc<I>,
    pub(crate) clock: Arc<CL>,
    pub(crate) calendar: Calendar,
    pub(crate) user_locks: UserLocks,
}

impl<P, M, S, W, A, I, CL> Service<P, M, S, W, A, I, CL> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile_repository: P,
        meal_repository: M,
        streak_repository: S,
        weekly_stat_repository: W,
        analysis_client: A,
        image_store: I,
        clock: CL,
        calendar: Calendar,
    ) -> Self {
        Self {
            profile_repository: Arc::new(profile_repository),
            meal_repository: Arc::new(meal_repository),
            streak_repository: Arc::new(streak_repository),
            weekly_stat_repository: Arc::new(weekly_stat_repository),
            analysis_client: Arc::new(analysis_client),
            image_store: Arc::new(image_store),
            clock: Arc::new(clock),
            calendar,
            user_locks: UserLocks::default(),
        }
    }

    pub fn calendar(&self) -> Calendar {
        self.calendar
    }
}

impl<P, M, S, W, A, I, CL> Clone for Service<P, M, S, W, A, I, CL> {
    fn clone(&self) -> Self {
        Self {
            profile_repository: Arc::clone(&self.profile_repository),
            meal_repository: Arc::clone(&self.meal_repository),
            streak_repository: Arc::clone(&self.streak_repository),
            weekly_stat_repository: Arc::clone(&self.weekly_stat_repository),
            analysis_client: Arc::clone(&self.analysis_client),
            image_store: Arc::clone(&self.image_store),
            clock: Arc::clone(&self.clock),
            calendar: self.calendar,
            user_locks: self.user_locks.clone(),
        }
    }
}

/// Per-user exclusive sections for state shared across meals of one user
/// (streak counters, weekly stat rows).
///
/// An entry lives only while some task holds or waits for that user's lock.
#[derive(Clone, Default)]
pub struct UserLocks {
    locks: Arc<DashMap<Uuid, Arc<Mutex<()>>>>,
}

impl UserLocks {
    pub async fn lock(&self, user_id: Uuid) -> UserLockGuard {
        let lock = self.locks.entry(user_id).or_default().clone();
        let guard = lock.lock_owned().await;

        UserLockGuard {
            guard: Some(guard),
            user_id,
            locks: Arc::clone(&self.locks),
        }
    }
}

pub struct UserLockGuard {
    guard: Option<OwnedMutexGuard<()>>,
    user_id: Uuid,
    locks: Arc<DashMap<Uuid, Arc<Mutex<()>>>>,
}

impl Drop for UserLockGuard {
    fn drop(&mut self) {
        // release first so the map holds the only reference when nobody waits
        drop(self.guard.take());
        self.locks
            .remove_if(&self.user_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
