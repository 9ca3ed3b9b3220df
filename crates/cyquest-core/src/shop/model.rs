//! Shop item domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Category a shop item belongs to.
///
/// Cosmetic categories (`cursor`, `theme`) participate in the equipped
/// set with an at-most-one-per-category invariant. Boosters are
/// consumables and never enter the equipped set. Premium items are owned
/// but have no equip behavior.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemCategory {
    Cursor,
    Theme,
    Booster,
    Premium,
}

impl ItemCategory {
    /// Whether items of this category occupy an equip slot.
    pub fn is_cosmetic(&self) -> bool {
        matches!(self, Self::Cursor | Self::Theme)
    }
}

/// Effect parameters of a booster item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoosterSpec {
    /// XP bonus in percent (25 means +25%).
    pub boost_percent: u32,
    /// How long the booster stays live once activated.
    pub duration_hours: i64,
}

impl BoosterSpec {
    /// The XP multiplier this booster applies while live.
    pub fn multiplier(&self) -> f64 {
        1.0 + f64::from(self.boost_percent) / 100.0
    }
}

/// A purchasable entity in the local economy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    /// Stable identity, unique across the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Marketing copy shown in the shop. Demo data, not behavior.
    pub description: String,
    /// Category the item belongs to.
    pub category: ItemCategory,
    /// Coin cost. The per-category defaults cost zero.
    pub price: u64,
    /// Effect parameters, present only for boosters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booster: Option<BoosterSpec>,
}

impl ShopItem {
    /// Whether this is a free default item, owned from first load.
    pub fn is_default(&self) -> bool {
        self.price == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booster_multiplier() {
        let spec = BoosterSpec {
            boost_percent: 25,
            duration_hours: 1,
        };
        assert!((spec.multiplier() - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cosmetic_categories() {
        assert!(ItemCategory::Cursor.is_cosmetic());
        assert!(ItemCategory::Theme.is_cosmetic());
        assert!(!ItemCategory::Booster.is_cosmetic());
        assert!(!ItemCategory::Premium.is_cosmetic());
    }
}
