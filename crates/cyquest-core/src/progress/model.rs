//! Progression domain models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use version_migrate::DeriveQueryable as Queryable;

/// Why a mission completion was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MissionError {
    /// The id does not exist in the mission fixtures.
    #[error("unknown mission '{0}'")]
    UnknownMission(String),

    /// Repeat completion of a mission.
    #[error("mission '{0}' is already completed")]
    AlreadyCompleted(String),
}

/// A demo mission with its rewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Stable identity.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Coins credited on completion.
    pub coin_reward: u64,
    /// Base XP credited on completion, before the booster multiplier.
    pub xp_reward: u64,
}

/// The persisted progression document: accumulated XP and which missions
/// have been completed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Queryable)]
#[queryable(entity = "progress")]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Accumulated experience points.
    pub xp: u64,
    missions_completed: BTreeSet<String>,
}

impl Progress {
    /// Builds a progress document from its parts (persistence layer).
    pub fn from_parts<I, S>(xp: u64, completed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            xp,
            missions_completed: completed.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `mission_id` has been completed.
    pub fn is_completed(&self, mission_id: &str) -> bool {
        self.missions_completed.contains(mission_id)
    }

    /// Completed mission ids in stable order.
    pub fn completed_ids(&self) -> impl Iterator<Item = &str> {
        self.missions_completed.iter().map(String::as_str)
    }

    /// Records a completion and credits XP under `multiplier`.
    ///
    /// Returns the XP actually credited (`floor(base * multiplier)`).
    pub fn complete(&mut self, mission: &Mission, multiplier: f64) -> Result<u64, MissionError> {
        if !self.missions_completed.insert(mission.id.clone()) {
            return Err(MissionError::AlreadyCompleted(mission.id.clone()));
        }
        let credited = (mission.xp_reward as f64 * multiplier).floor() as u64;
        self.xp = self.xp.saturating_add(credited);
        Ok(credited)
    }
}

/// The built-in demo missions.
pub fn demo_missions() -> Vec<Mission> {
    vec![
        Mission {
            id: "mission-daily-login".to_string(),
            title: "Daily Check-in".to_string(),
            coin_reward: 50,
            xp_reward: 50,
        },
        Mission {
            id: "mission-phishing-email".to_string(),
            title: "Spot the Phish".to_string(),
            coin_reward: 150,
            xp_reward: 200,
        },
        Mission {
            id: "mission-password-audit".to_string(),
            title: "Password Audit".to_string(),
            coin_reward: 100,
            xp_reward: 150,
        },
        Mission {
            id: "mission-firewall-setup".to_string(),
            title: "Firewall Drill".to_string(),
            coin_reward: 250,
            xp_reward: 400,
        },
    ]
}
