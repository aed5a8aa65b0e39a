// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use showcase_admin::application::ports::time::Clock;

#[derive(Clone, Default)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}
