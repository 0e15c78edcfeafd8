//! Rule store and its supporting pieces: the clock used for expiry and per-model enhancement.

mod clock;
mod enhance;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{CachedRules, RuleStore, RuleStoreConfig, DEFAULT_TTL};
