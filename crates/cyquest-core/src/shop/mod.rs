//! Shop item models and the demo catalog.

mod catalog;
mod model;

pub use catalog::{DEFAULT_CURSOR_ID, DEFAULT_THEME_ID, ItemCatalog, demo_catalog};
pub use model::{BoosterSpec, ItemCategory, ShopItem};
