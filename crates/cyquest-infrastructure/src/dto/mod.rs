//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema for persisting data.
//! They are private to the infrastructure layer and handle the evolution
//! of the storage format over time.
//!
//! ## Schema Versioning (Semantic Versioning)
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible additions (new optional fields)
//!
//! ### Loadout Version History
//! - **1.0.0**: Equipped cosmetics only
//! - **1.1.0**: Added the single booster slot

mod config_root;
mod economy;
mod enrollment;
mod progress;

pub use config_root::{ConfigRootV1_0, create_config_root_migrator};
pub use economy::{
    ActiveBoosterDTO, InventoryV1_0, LoadoutV1_0, LoadoutV1_1, WalletV1_0,
    create_inventory_migrator, create_loadout_migrator, create_wallet_migrator,
};
pub use enrollment::{EnrollmentsV1_0, create_enrollments_migrator};
pub use progress::{ProgressV1_0, create_progress_migrator};
