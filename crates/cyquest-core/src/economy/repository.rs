//! Economy store trait.

use async_trait::async_trait;

use crate::economy::model::{Inventory, Loadout, Wallet};
use crate::error::Result;

/// Persistence contract for the economy documents.
///
/// Wallet, inventory and loadout are independent documents; saving one
/// never touches the others. There is no cross-document transaction - a
/// torn write between wallet and inventory is accepted demo behavior.
#[async_trait]
pub trait EconomyStore: Send + Sync {
    /// Loads the wallet, falling back to the default starting balance.
    async fn load_wallet(&self) -> Result<Wallet>;

    /// Saves the wallet document.
    async fn save_wallet(&self, wallet: &Wallet) -> Result<()>;

    /// Loads the inventory, falling back to the free defaults.
    async fn load_inventory(&self) -> Result<Inventory>;

    /// Saves the inventory document.
    async fn save_inventory(&self, inventory: &Inventory) -> Result<()>;

    /// Loads the loadout, falling back to the default cosmetics.
    async fn load_loadout(&self) -> Result<Loadout>;

    /// Saves the loadout document.
    async fn save_loadout(&self, loadout: &Loadout) -> Result<()>;
}
