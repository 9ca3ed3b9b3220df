//! Economy domain models and state transitions.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use version_migrate::DeriveQueryable as Queryable;

use crate::shop::{DEFAULT_CURSOR_ID, DEFAULT_THEME_ID, ItemCategory, ShopItem};

/// Coin balance a fresh demo account starts with.
pub const DEFAULT_STARTING_COINS: u64 = 4850;

/// Why a shop operation was rejected.
///
/// Rejections are contracts, not faults: the caller renders feedback and
/// the state is guaranteed unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// The id does not exist in the catalog.
    #[error("unknown item '{0}'")]
    UnknownItem(String),

    /// Purchase of an item that is already owned.
    #[error("item '{0}' is already owned")]
    AlreadyOwned(String),

    /// Equip of an item that has not been purchased.
    #[error("item '{0}' is not owned")]
    ItemNotOwned(String),

    /// Purchase the wallet cannot cover.
    #[error("insufficient funds for '{item_id}': need {required}, have {available}")]
    InsufficientFunds {
        item_id: String,
        required: u64,
        available: u64,
    },

    /// Equip of a category with no equip behavior (premium items).
    #[error("item '{0}' cannot be equipped")]
    NotEquippable(String),
}

/// Coin balance. Non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable)]
#[queryable(entity = "wallet")]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Spendable coins.
    pub coins: u64,
}

impl Wallet {
    /// Creates a wallet holding `coins`.
    pub fn new(coins: u64) -> Self {
        Self { coins }
    }

    /// Whether the wallet covers `price`.
    pub fn can_afford(&self, price: u64) -> bool {
        self.coins >= price
    }

    /// Adds mission/reward coins.
    pub fn credit(&mut self, amount: u64) {
        self.coins = self.coins.saturating_add(amount);
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self {
            coins: DEFAULT_STARTING_COINS,
        }
    }
}

/// The set of owned item ids. Grows monotonically; there are no refunds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable)]
#[queryable(entity = "inventory")]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    owned: BTreeSet<String>,
}

impl Inventory {
    /// Builds an inventory from a list of owned ids (persistence layer).
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            owned: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `item_id` is owned.
    pub fn contains(&self, item_id: &str) -> bool {
        self.owned.contains(item_id)
    }

    /// Records ownership of `item_id`.
    pub fn insert(&mut self, item_id: impl Into<String>) {
        self.owned.insert(item_id.into());
    }

    /// Owned ids in stable order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.owned.iter().map(String::as_str)
    }

    /// Number of owned items.
    pub fn len(&self) -> usize {
        self.owned.len()
    }

    /// Whether nothing is owned. Never true in practice: the free
    /// defaults are owned from first load.
    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        let mut owned = BTreeSet::new();
        owned.insert(DEFAULT_CURSOR_ID.to_string());
        owned.insert(DEFAULT_THEME_ID.to_string());
        Self { owned }
    }
}

/// The single live XP booster.
///
/// At most one instance exists at a time; activating another booster
/// overwrites it. Expiry is lazy: nothing sweeps the slot, readers check
/// the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveBooster {
    /// XP multiplier while live (1.25 for a +25% booster).
    pub multiplier: f64,
    /// Instant the booster stops applying.
    pub expires_at: DateTime<Utc>,
}

impl ActiveBooster {
    /// Whether the booster still applies at `now`.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Time left at `now`, zero once expired.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}

/// What is currently active: one cosmetic per category plus the booster
/// slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable)]
#[queryable(entity = "loadout")]
#[serde(rename_all = "camelCase")]
pub struct Loadout {
    /// Equipped cosmetic per category. The map shape enforces the
    /// at-most-one-per-category invariant structurally.
    equipped: BTreeMap<ItemCategory, String>,
    /// The single booster slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    booster: Option<ActiveBooster>,
}

impl Loadout {
    /// Builds a loadout from its parts (persistence layer).
    ///
    /// The map shape keeps the one-per-category invariant intact no
    /// matter what the stored document contained.
    pub fn from_parts(
        equipped: BTreeMap<ItemCategory, String>,
        booster: Option<ActiveBooster>,
    ) -> Self {
        Self { equipped, booster }
    }

    /// The equipped map (persistence layer).
    pub fn equipped_map(&self) -> &BTreeMap<ItemCategory, String> {
        &self.equipped
    }

    /// The equipped id for `category`, if any.
    pub fn equipped(&self, category: ItemCategory) -> Option<&str> {
        self.equipped.get(&category).map(String::as_str)
    }

    /// All equipped ids in stable order.
    pub fn equipped_ids(&self) -> impl Iterator<Item = &str> {
        self.equipped.values().map(String::as_str)
    }

    /// Equips a cosmetic, evicting the category's previous occupant.
    pub fn equip_cosmetic(&mut self, category: ItemCategory, item_id: impl Into<String>) {
        debug_assert!(category.is_cosmetic());
        self.equipped.insert(category, item_id.into());
    }

    /// Activates a booster, overwriting any live one.
    pub fn activate_booster(&mut self, booster: ActiveBooster) {
        self.booster = Some(booster);
    }

    /// The booster if it is still live at `now`.
    pub fn booster_at(&self, now: DateTime<Utc>) -> Option<&ActiveBooster> {
        self.booster.as_ref().filter(|b| b.is_live_at(now))
    }

    /// The raw booster slot, including an expired instance.
    pub fn raw_booster(&self) -> Option<&ActiveBooster> {
        self.booster.as_ref()
    }
}

impl Default for Loadout {
    fn default() -> Self {
        let mut equipped = BTreeMap::new();
        equipped.insert(ItemCategory::Cursor, DEFAULT_CURSOR_ID.to_string());
        equipped.insert(ItemCategory::Theme, DEFAULT_THEME_ID.to_string());
        Self {
            equipped,
            booster: None,
        }
    }
}

/// The full economy state of one demo account.
///
/// Wallet, inventory and loadout are persisted as independent documents;
/// this struct is the in-memory view the operations run against.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomyState {
    pub wallet: Wallet,
    pub inventory: Inventory,
    pub loadout: Loadout,
}

impl EconomyState {
    /// Purchases `item`: deducts the price and records ownership.
    ///
    /// Guard order matters: an already-owned item is rejected before the
    /// wallet is consulted, so a repeated purchase can never deduct twice.
    pub fn purchase(&mut self, item: &ShopItem) -> Result<(), ShopError> {
        if self.inventory.contains(&item.id) {
            return Err(ShopError::AlreadyOwned(item.id.clone()));
        }
        if !self.wallet.can_afford(item.price) {
            return Err(ShopError::InsufficientFunds {
                item_id: item.id.clone(),
                required: item.price,
                available: self.wallet.coins,
            });
        }

        self.wallet.coins -= item.price;
        self.inventory.insert(item.id.clone());
        Ok(())
    }

    /// Equips an owned item.
    ///
    /// Cosmetics replace the category's occupant; boosters fill the single
    /// booster slot, overwriting any live one. Premium items have no equip
    /// behavior.
    pub fn equip(&mut self, item: &ShopItem, now: DateTime<Utc>) -> Result<(), ShopError> {
        if !self.inventory.contains(&item.id) {
            return Err(ShopError::ItemNotOwned(item.id.clone()));
        }

        match item.category {
            ItemCategory::Cursor | ItemCategory::Theme => {
                self.loadout.equip_cosmetic(item.category, item.id.clone());
                Ok(())
            }
            ItemCategory::Booster => {
                let spec = item
                    .booster
                    .ok_or_else(|| ShopError::NotEquippable(item.id.clone()))?;
                self.loadout.activate_booster(ActiveBooster {
                    multiplier: spec.multiplier(),
                    expires_at: now + Duration::hours(spec.duration_hours),
                });
                Ok(())
            }
            ItemCategory::Premium => Err(ShopError::NotEquippable(item.id.clone())),
        }
    }

    /// Restores the default loadout: the two free cosmetics equipped, no
    /// booster. Ownership and coins are untouched.
    pub fn reset_to_defaults(&mut self) {
        self.loadout = Loadout::default();
    }

    /// The XP multiplier in effect at `now` (1.0 without a live booster).
    pub fn xp_multiplier_at(&self, now: DateTime<Utc>) -> f64 {
        self.loadout
            .booster_at(now)
            .map(|b| b.multiplier)
            .unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::demo_catalog;

    fn item(id: &str) -> ShopItem {
        demo_catalog().get(id).cloned().unwrap()
    }

    fn now() -> DateTime<Utc> {
        "2026-03-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_defaults_owned_and_equipped_from_first_load() {
        let state = EconomyState::default();
        assert_eq!(state.wallet.coins, DEFAULT_STARTING_COINS);
        assert!(state.inventory.contains(DEFAULT_CURSOR_ID));
        assert!(state.inventory.contains(DEFAULT_THEME_ID));
        assert_eq!(
            state.loadout.equipped(ItemCategory::Cursor),
            Some(DEFAULT_CURSOR_ID)
        );
        assert_eq!(
            state.loadout.equipped(ItemCategory::Theme),
            Some(DEFAULT_THEME_ID)
        );
        assert!(state.loadout.raw_booster().is_none());
    }

    #[test]
    fn test_purchase_deducts_and_records() {
        let mut state = EconomyState::default();
        state.purchase(&item("cursor-cyber")).unwrap();
        assert_eq!(state.wallet.coins, DEFAULT_STARTING_COINS - 250);
        assert!(state.inventory.contains("cursor-cyber"));
    }

    #[test]
    fn test_purchase_never_overdrafts() {
        let mut state = EconomyState::default();
        state.wallet = Wallet::new(100);

        let err = state.purchase(&item("cursor-cyber")).unwrap_err();
        assert_eq!(
            err,
            ShopError::InsufficientFunds {
                item_id: "cursor-cyber".to_string(),
                required: 250,
                available: 100,
            }
        );
        // Rejection leaves the state untouched.
        assert_eq!(state.wallet.coins, 100);
        assert!(!state.inventory.contains("cursor-cyber"));
    }

    #[test]
    fn test_purchase_twice_deducts_once() {
        let mut state = EconomyState::default();
        state.purchase(&item("cursor-cyber")).unwrap();
        let err = state.purchase(&item("cursor-cyber")).unwrap_err();
        assert_eq!(err, ShopError::AlreadyOwned("cursor-cyber".to_string()));
        assert_eq!(state.wallet.coins, DEFAULT_STARTING_COINS - 250);
        assert_eq!(state.inventory.len(), 3);
    }

    #[test]
    fn test_equip_requires_ownership() {
        let mut state = EconomyState::default();
        let err = state.equip(&item("theme-dark-ops"), now()).unwrap_err();
        assert_eq!(err, ShopError::ItemNotOwned("theme-dark-ops".to_string()));
        assert_eq!(
            state.loadout.equipped(ItemCategory::Theme),
            Some(DEFAULT_THEME_ID)
        );
    }

    #[test]
    fn test_at_most_one_equipped_per_cosmetic_category() {
        let mut state = EconomyState::default();
        state.purchase(&item("cursor-cyber")).unwrap();
        state.purchase(&item("cursor-neon")).unwrap();
        state.purchase(&item("theme-dark-ops")).unwrap();

        state.equip(&item("cursor-cyber"), now()).unwrap();
        state.equip(&item("cursor-neon"), now()).unwrap();
        state.equip(&item("theme-dark-ops"), now()).unwrap();

        assert_eq!(
            state.loadout.equipped(ItemCategory::Cursor),
            Some("cursor-neon")
        );
        assert_eq!(
            state.loadout.equipped(ItemCategory::Theme),
            Some("theme-dark-ops")
        );
        assert_eq!(state.loadout.equipped_ids().count(), 2);
    }

    #[test]
    fn test_booster_overwrites_not_stacks() {
        let mut state = EconomyState::default();
        state.purchase(&item("booster-small")).unwrap();
        state.purchase(&item("booster-large")).unwrap();

        state.equip(&item("booster-small"), now()).unwrap();
        state.equip(&item("booster-large"), now()).unwrap();

        let booster = state.loadout.booster_at(now()).unwrap();
        // Only the second booster's effect applies, no additive combination.
        assert!((booster.multiplier - 1.5).abs() < f64::EPSILON);
        assert_eq!(booster.expires_at, now() + Duration::hours(4));
        // Boosters never enter the equipped set.
        assert_eq!(state.loadout.equipped_ids().count(), 2);
    }

    #[test]
    fn test_booster_lazy_expiry() {
        let mut state = EconomyState::default();
        state.purchase(&item("booster-small")).unwrap();
        state.equip(&item("booster-small"), now()).unwrap();

        let just_before = now() + Duration::minutes(59);
        let just_after = now() + Duration::hours(1);
        assert!(state.loadout.booster_at(just_before).is_some());
        assert!(state.loadout.booster_at(just_after).is_none());
        // The slot itself is not swept.
        assert!(state.loadout.raw_booster().is_some());

        // A fresh equip transitions straight to the new booster.
        state.purchase(&item("booster-large")).unwrap();
        state.equip(&item("booster-large"), just_after).unwrap();
        let booster = state.loadout.booster_at(just_after).unwrap();
        assert!((booster.multiplier - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_premium_items_are_not_equippable() {
        let mut state = EconomyState::default();
        state.purchase(&item("premium-hint-pack")).unwrap();
        let err = state.equip(&item("premium-hint-pack"), now()).unwrap_err();
        assert_eq!(
            err,
            ShopError::NotEquippable("premium-hint-pack".to_string())
        );
    }

    #[test]
    fn test_reset_restores_defaults_only() {
        let mut state = EconomyState::default();
        state.purchase(&item("cursor-cyber")).unwrap();
        state.purchase(&item("booster-small")).unwrap();
        state.equip(&item("cursor-cyber"), now()).unwrap();
        state.equip(&item("booster-small"), now()).unwrap();
        let coins_before = state.wallet.coins;

        state.reset_to_defaults();

        assert_eq!(
            state.loadout.equipped(ItemCategory::Cursor),
            Some(DEFAULT_CURSOR_ID)
        );
        assert_eq!(
            state.loadout.equipped(ItemCategory::Theme),
            Some(DEFAULT_THEME_ID)
        );
        assert!(state.loadout.raw_booster().is_none());
        // Ownership and coins survive a reset.
        assert_eq!(state.wallet.coins, coins_before);
        assert!(state.inventory.contains("cursor-cyber"));
        assert!(state.inventory.contains("booster-small"));
    }

    #[test]
    fn test_shop_walkthrough_scenario() {
        // Fresh account: 4850 coins, the two free defaults owned.
        let mut state = EconomyState::default();
        assert_eq!(state.wallet.coins, 4850);

        state.purchase(&item("cursor-cyber")).unwrap();
        assert_eq!(state.wallet.coins, 4600);
        assert!(state.inventory.contains("cursor-cyber"));

        state.equip(&item("cursor-cyber"), now()).unwrap();
        let equipped: Vec<_> = state.loadout.equipped_ids().collect();
        assert_eq!(equipped, vec!["cursor-cyber", DEFAULT_THEME_ID]);

        // The booster was owned already (earlier session), so equipping it
        // costs nothing now.
        state.inventory.insert("booster-small");
        state.equip(&item("booster-small"), now()).unwrap();
        let booster = state.loadout.booster_at(now()).unwrap();
        assert!((booster.multiplier - 1.25).abs() < f64::EPSILON);
        assert_eq!(booster.expires_at, now() + Duration::hours(1));

        state.reset_to_defaults();
        let equipped: Vec<_> = state.loadout.equipped_ids().collect();
        assert_eq!(equipped, vec![DEFAULT_CURSOR_ID, DEFAULT_THEME_ID]);
        assert!(state.loadout.raw_booster().is_none());
        assert_eq!(state.wallet.coins, 4600);
    }

    #[test]
    fn test_xp_multiplier_defaults_to_one() {
        let state = EconomyState::default();
        assert!((state.xp_multiplier_at(now()) - 1.0).abs() < f64::EPSILON);
    }
}
