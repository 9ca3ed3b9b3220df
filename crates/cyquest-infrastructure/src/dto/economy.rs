//! Economy DTOs and migrations

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Versioned};

use cyquest_core::economy::{ActiveBooster, Inventory, Loadout, Wallet};
use cyquest_core::shop::ItemCategory;

// ============================================================================
// Wallet
// ============================================================================

/// Wallet document V1.0.0.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct WalletV1_0 {
    /// Spendable coins.
    pub coins: u64,
}

impl Default for WalletV1_0 {
    fn default() -> Self {
        Self {
            coins: cyquest_core::economy::DEFAULT_STARTING_COINS,
        }
    }
}

impl IntoDomain<Wallet> for WalletV1_0 {
    fn into_domain(self) -> Wallet {
        Wallet::new(self.coins)
    }
}

impl FromDomain<Wallet> for WalletV1_0 {
    fn from_domain(wallet: Wallet) -> Self {
        Self {
            coins: wallet.coins,
        }
    }
}

// ============================================================================
// Inventory
// ============================================================================

/// Inventory document V1.0.0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct InventoryV1_0 {
    /// Owned item ids.
    pub owned: Vec<String>,
}

impl IntoDomain<Inventory> for InventoryV1_0 {
    fn into_domain(self) -> Inventory {
        Inventory::from_ids(self.owned)
    }
}

impl FromDomain<Inventory> for InventoryV1_0 {
    fn from_domain(inventory: Inventory) -> Self {
        Self {
            owned: inventory.ids().map(str::to_string).collect(),
        }
    }
}

// ============================================================================
// Loadout
// ============================================================================

/// Booster slot DTO (shared by the loadout versions that carry it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveBoosterDTO {
    /// XP multiplier while live.
    pub multiplier: f64,
    /// Instant the booster stops applying.
    pub expires_at: DateTime<Utc>,
}

/// Loadout document V1.0.0 (equipped cosmetics only, pre-booster).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct LoadoutV1_0 {
    /// Equipped cosmetic per category.
    pub equipped: BTreeMap<ItemCategory, String>,
}

/// Loadout document V1.1.0 (added the single booster slot).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
#[serde(rename_all = "camelCase")]
pub struct LoadoutV1_1 {
    /// Equipped cosmetic per category.
    pub equipped: BTreeMap<ItemCategory, String>,

    /// The single booster slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booster: Option<ActiveBoosterDTO>,
}

/// Migration from LoadoutV1_0 to LoadoutV1_1.
/// Adds the booster slot, empty by default.
impl MigratesTo<LoadoutV1_1> for LoadoutV1_0 {
    fn migrate(self) -> LoadoutV1_1 {
        LoadoutV1_1 {
            equipped: self.equipped,
            booster: None,
        }
    }
}

impl IntoDomain<Loadout> for LoadoutV1_1 {
    fn into_domain(self) -> Loadout {
        Loadout::from_parts(
            self.equipped,
            self.booster.map(|b| ActiveBooster {
                multiplier: b.multiplier,
                expires_at: b.expires_at,
            }),
        )
    }
}

impl FromDomain<Loadout> for LoadoutV1_1 {
    fn from_domain(loadout: Loadout) -> Self {
        Self {
            equipped: loadout.equipped_map().clone(),
            booster: loadout.raw_booster().map(|b| ActiveBoosterDTO {
                multiplier: b.multiplier,
                expires_at: b.expires_at,
            }),
        }
    }
}

// ============================================================================
// Migrator factories
// ============================================================================

/// Creates and configures a Migrator instance for Wallet documents.
pub fn create_wallet_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let wallet_path = version_migrate::Migrator::define("wallet")
        .from::<WalletV1_0>()
        .into_with_save::<Wallet>();

    migrator
        .register(wallet_path)
        .expect("Failed to register wallet migration path");

    migrator
}

/// Creates and configures a Migrator instance for Inventory documents.
pub fn create_inventory_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let inventory_path = version_migrate::Migrator::define("inventory")
        .from::<InventoryV1_0>()
        .into_with_save::<Inventory>();

    migrator
        .register(inventory_path)
        .expect("Failed to register inventory migration path");

    migrator
}

/// Creates and configures a Migrator instance for Loadout documents.
///
/// # Migration Path
///
/// - V1.0 → V1.1: Adds the booster slot (empty)
/// - V1.1 → Loadout: Converts DTO to domain model
pub fn create_loadout_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let loadout_path = version_migrate::Migrator::define("loadout")
        .from::<LoadoutV1_0>()
        .step::<LoadoutV1_1>()
        .into_with_save::<Loadout>();

    migrator
        .register(loadout_path)
        .expect("Failed to register loadout migration path");

    migrator
}
