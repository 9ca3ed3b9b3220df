//! Mission and XP progression domain.
//!
//! Mission rewards are the platform's only coin source; XP credits go
//! through the live booster multiplier. Reward amounts are demo fixtures,
//! there is no server truth behind them.

mod model;
mod repository;

pub use model::{Mission, MissionError, Progress, demo_missions};
pub use repository::ProgressRepository;
