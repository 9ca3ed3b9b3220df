//! File-backed economy store.
//!
//! Wallet, inventory and loadout live in separate documents under the
//! state directory. Each document goes through its own migrating
//! FileStorage; there is no cross-document transaction.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use version_migrate::{FileStorage, FileStorageStrategy, FormatStrategy, LoadBehavior};

use cyquest_core::economy::{EconomyStore, Inventory, Loadout, Wallet};
use cyquest_core::error::{CyquestError, Result};

use crate::dto::{create_inventory_migrator, create_loadout_migrator, create_wallet_migrator};
use crate::paths::CyquestPaths;

/// Economy store persisting each document via version-migrate FileStorage.
#[derive(Clone)]
pub struct FileEconomyStore {
    wallet: Arc<Mutex<FileStorage>>,
    inventory: Arc<Mutex<FileStorage>>,
    loadout: Arc<Mutex<FileStorage>>,
    /// Fallback when the wallet document is missing or empty.
    default_wallet: Wallet,
}

impl FileEconomyStore {
    /// Creates a store rooted at `state_dir`.
    ///
    /// Missing documents are created with their defaults on first access;
    /// `starting_coins` seeds the wallet.
    pub fn new(state_dir: &Path, starting_coins: u64) -> Result<Self> {
        let default_wallet = Wallet::new(starting_coins);

        let wallet = Self::open_storage(
            state_dir.join("wallet.json"),
            create_wallet_migrator(),
            serde_json::to_value(&default_wallet)?,
        )?;
        let inventory = Self::open_storage(
            state_dir.join("inventory.json"),
            create_inventory_migrator(),
            serde_json::to_value(Inventory::default())?,
        )?;
        let loadout = Self::open_storage(
            state_dir.join("loadout.json"),
            create_loadout_migrator(),
            serde_json::to_value(Loadout::default())?,
        )?;

        Ok(Self {
            wallet: Arc::new(Mutex::new(wallet)),
            inventory: Arc::new(Mutex::new(inventory)),
            loadout: Arc::new(Mutex::new(loadout)),
            default_wallet,
        })
    }

    /// Creates a store rooted at the default state directory.
    pub fn with_default_dir(starting_coins: u64) -> Result<Self> {
        let state_dir =
            CyquestPaths::state_dir().map_err(|e| CyquestError::config(e.to_string()))?;
        Self::new(&state_dir, starting_coins)
    }

    fn open_storage(
        path: PathBuf,
        migrator: version_migrate::Migrator,
        default_value: serde_json::Value,
    ) -> Result<FileStorage> {
        let strategy = FileStorageStrategy::new()
            .with_format(FormatStrategy::Json)
            .with_load_behavior(LoadBehavior::SaveIfMissing)
            .with_default_value(default_value);

        let storage = FileStorage::new(path, migrator, strategy)?;
        Ok(storage)
    }
}

#[async_trait]
impl EconomyStore for FileEconomyStore {
    async fn load_wallet(&self) -> Result<Wallet> {
        let storage = self.wallet.lock().await;
        let wallets: Vec<Wallet> = storage.query("wallet")?;
        Ok(wallets
            .into_iter()
            .next()
            .unwrap_or_else(|| self.default_wallet.clone()))
    }

    async fn save_wallet(&self, wallet: &Wallet) -> Result<()> {
        let storage = self.wallet.clone();
        let wallet = wallet.clone();
        tokio::task::spawn_blocking(move || {
            let mut storage = storage.blocking_lock();
            storage
                .update_and_save("wallet", vec![wallet])
                .map_err(|e| CyquestError::data_access(format!("Failed to save wallet: {}", e)))
        })
        .await
        .map_err(|e| CyquestError::internal(format!("Failed to join task: {}", e)))??;

        Ok(())
    }

    async fn load_inventory(&self) -> Result<Inventory> {
        let storage = self.inventory.lock().await;
        let inventories: Vec<Inventory> = storage.query("inventory")?;
        Ok(inventories.into_iter().next().unwrap_or_default())
    }

    async fn save_inventory(&self, inventory: &Inventory) -> Result<()> {
        let storage = self.inventory.clone();
        let inventory = inventory.clone();
        tokio::task::spawn_blocking(move || {
            let mut storage = storage.blocking_lock();
            storage
                .update_and_save("inventory", vec![inventory])
                .map_err(|e| CyquestError::data_access(format!("Failed to save inventory: {}", e)))
        })
        .await
        .map_err(|e| CyquestError::internal(format!("Failed to join task: {}", e)))??;

        Ok(())
    }

    async fn load_loadout(&self) -> Result<Loadout> {
        let storage = self.loadout.lock().await;
        let loadouts: Vec<Loadout> = storage.query("loadout")?;
        Ok(loadouts.into_iter().next().unwrap_or_default())
    }

    async fn save_loadout(&self, loadout: &Loadout) -> Result<()> {
        let storage = self.loadout.clone();
        let loadout = loadout.clone();
        tokio::task::spawn_blocking(move || {
            let mut storage = storage.blocking_lock();
            storage
                .update_and_save("loadout", vec![loadout])
                .map_err(|e| CyquestError::data_access(format!("Failed to save loadout: {}", e)))
        })
        .await
        .map_err(|e| CyquestError::internal(format!("Failed to join task: {}", e)))??;

        Ok(())
    }
}
