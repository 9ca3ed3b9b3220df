//! Local economy domain: wallet, inventory, loadout and the single
//! active XP booster.
//!
//! All operations are pure state transitions with explicit outcomes; a
//! rejected operation leaves every document untouched. Persistence is the
//! repository's concern.

mod model;
mod repository;

pub use model::{
    ActiveBooster, DEFAULT_STARTING_COINS, EconomyState, Inventory, Loadout, ShopError, Wallet,
};
pub use repository::EconomyStore;
