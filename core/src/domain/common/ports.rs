use chrono::{DateTime, Utc};

/// Source of the current instant, injected so that calendar logic is testable.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
