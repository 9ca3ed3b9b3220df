//! Mission service implementation.
//!
//! Mission completion is the coin source of the demo economy: rewards
//! credit the wallet directly, and XP goes through the live booster
//! multiplier read from the loadout document.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use cyquest_core::economy::EconomyStore;
use cyquest_core::error::CyquestError;
use cyquest_core::progress::{Mission, MissionError, Progress, ProgressRepository};

/// Errors surfaced by mission operations.
#[derive(Error, Debug)]
pub enum MissionServiceError {
    /// The operation was rejected by the mission rules.
    #[error(transparent)]
    Rejected(#[from] MissionError),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] CyquestError),
}

/// What a completed mission paid out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReward {
    /// Coins credited to the wallet.
    pub coins: u64,
    /// XP credited after the multiplier.
    pub xp: u64,
    /// Multiplier that was in effect.
    pub multiplier: f64,
}

/// Service for the mission board.
pub struct MissionService {
    /// Store for the wallet and loadout documents.
    economy: Arc<dyn EconomyStore>,
    /// Repository for the progression document.
    progress: Arc<dyn ProgressRepository>,
    /// Missions the ids resolve against.
    missions: Vec<Mission>,
}

impl MissionService {
    /// Creates the service over `missions`.
    pub fn new(
        economy: Arc<dyn EconomyStore>,
        progress: Arc<dyn ProgressRepository>,
        missions: Vec<Mission>,
    ) -> Self {
        Self {
            economy,
            progress,
            missions,
        }
    }

    /// The mission board.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// The current progression document.
    pub async fn progress(&self) -> Result<Progress, CyquestError> {
        self.progress.load().await
    }

    /// Completes a mission, crediting coins and boosted XP.
    pub async fn complete(&self, mission_id: &str) -> Result<CompletionReward, MissionServiceError> {
        self.complete_at(mission_id, Utc::now()).await
    }

    /// Completes a mission, evaluating the booster at `now`.
    pub async fn complete_at(
        &self,
        mission_id: &str,
        now: DateTime<Utc>,
    ) -> Result<CompletionReward, MissionServiceError> {
        let mission = self
            .missions
            .iter()
            .find(|m| m.id == mission_id)
            .ok_or_else(|| MissionError::UnknownMission(mission_id.to_string()))?;

        let loadout = self.economy.load_loadout().await?;
        let multiplier = loadout.booster_at(now).map(|b| b.multiplier).unwrap_or(1.0);

        let mut progress = self.progress.load().await?;
        let xp = match progress.complete(mission, multiplier) {
            Ok(xp) => xp,
            Err(rejection) => {
                warn!(mission = mission_id, %rejection, "completion rejected");
                return Err(rejection.into());
            }
        };
        self.progress.save(&progress).await?;

        let mut wallet = self.economy.load_wallet().await?;
        wallet.credit(mission.coin_reward);
        self.economy.save_wallet(&wallet).await?;

        info!(
            mission = mission_id,
            coins = mission.coin_reward,
            xp,
            multiplier,
            "mission completed"
        );

        Ok(CompletionReward {
            coins: mission.coin_reward,
            xp,
            multiplier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use cyquest_core::economy::{ActiveBooster, Inventory, Loadout, Wallet};
    use cyquest_core::error::Result;
    use cyquest_core::progress::demo_missions;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockEconomyStore {
        wallet: Mutex<Wallet>,
        loadout: Mutex<Loadout>,
    }

    #[async_trait::async_trait]
    impl EconomyStore for MockEconomyStore {
        async fn load_wallet(&self) -> Result<Wallet> {
            Ok(self.wallet.lock().unwrap().clone())
        }

        async fn save_wallet(&self, wallet: &Wallet) -> Result<()> {
            *self.wallet.lock().unwrap() = wallet.clone();
            Ok(())
        }

        async fn load_inventory(&self) -> Result<Inventory> {
            Ok(Inventory::default())
        }

        async fn save_inventory(&self, _inventory: &Inventory) -> Result<()> {
            Ok(())
        }

        async fn load_loadout(&self) -> Result<Loadout> {
            Ok(self.loadout.lock().unwrap().clone())
        }

        async fn save_loadout(&self, loadout: &Loadout) -> Result<()> {
            *self.loadout.lock().unwrap() = loadout.clone();
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockProgressRepository {
        progress: Mutex<Progress>,
    }

    #[async_trait::async_trait]
    impl ProgressRepository for MockProgressRepository {
        async fn load(&self) -> Result<Progress> {
            Ok(self.progress.lock().unwrap().clone())
        }

        async fn save(&self, progress: &Progress) -> Result<()> {
            *self.progress.lock().unwrap() = progress.clone();
            Ok(())
        }
    }

    fn now() -> DateTime<Utc> {
        "2026-03-01T12:00:00Z".parse().unwrap()
    }

    fn service(economy: Arc<MockEconomyStore>) -> MissionService {
        MissionService::new(
            economy,
            Arc::new(MockProgressRepository::default()),
            demo_missions(),
        )
    }

    #[tokio::test]
    async fn test_completion_credits_coins_and_base_xp() {
        let economy = Arc::new(MockEconomyStore::default());
        let service = service(economy.clone());

        let reward = service
            .complete_at("mission-phishing-email", now())
            .await
            .unwrap();
        assert_eq!(
            reward,
            CompletionReward {
                coins: 150,
                xp: 200,
                multiplier: 1.0,
            }
        );
        assert_eq!(economy.wallet.lock().unwrap().coins, 4850 + 150);
    }

    #[tokio::test]
    async fn test_completion_applies_live_booster() {
        let economy = Arc::new(MockEconomyStore::default());
        economy.loadout.lock().unwrap().activate_booster(ActiveBooster {
            multiplier: 1.25,
            expires_at: now() + Duration::hours(1),
        });
        let service = service(economy);

        let reward = service
            .complete_at("mission-password-audit", now())
            .await
            .unwrap();
        // floor(150 * 1.25) = 187
        assert_eq!(reward.xp, 187);
        assert!((reward.multiplier - 1.25).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_expired_booster_does_not_apply() {
        let economy = Arc::new(MockEconomyStore::default());
        economy.loadout.lock().unwrap().activate_booster(ActiveBooster {
            multiplier: 2.0,
            expires_at: now() - Duration::minutes(1),
        });
        let service = service(economy);

        let reward = service
            .complete_at("mission-daily-login", now())
            .await
            .unwrap();
        assert_eq!(reward.xp, 50);
        assert!((reward.multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_repeat_completion_rejected_without_double_pay() {
        let economy = Arc::new(MockEconomyStore::default());
        let service = service(economy.clone());

        service
            .complete_at("mission-daily-login", now())
            .await
            .unwrap();
        let err = service
            .complete_at("mission-daily-login", now())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MissionServiceError::Rejected(MissionError::AlreadyCompleted(_))
        ));
        assert_eq!(economy.wallet.lock().unwrap().coins, 4850 + 50);
    }

    #[tokio::test]
    async fn test_unknown_mission_rejected() {
        let economy = Arc::new(MockEconomyStore::default());
        let service = service(economy);

        let err = service.complete_at("mission-bogus", now()).await.unwrap_err();
        assert!(matches!(
            err,
            MissionServiceError::Rejected(MissionError::UnknownMission(_))
        ));
    }
}
