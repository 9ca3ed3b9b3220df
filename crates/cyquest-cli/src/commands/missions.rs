use anyhow::Result;

use cyquest_application::{AppContext, MissionServiceError};

use super::gate_student;

pub async fn list(ctx: &AppContext) -> Result<()> {
    if gate_student(ctx).await?.is_none() {
        return Ok(());
    }

    let progress = ctx.missions.progress().await?;
    println!("🎯 Mission board ({} XP total)", progress.xp);
    for mission in ctx.missions.missions() {
        let marker = if progress.is_completed(&mission.id) {
            "[done]"
        } else {
            ""
        };
        println!(
            "  {:<25} {:>4} coins {:>5} XP  {} {}",
            mission.id, mission.coin_reward, mission.xp_reward, mission.title, marker
        );
    }
    Ok(())
}

pub async fn complete(ctx: &AppContext, mission_id: &str) -> Result<()> {
    if gate_student(ctx).await?.is_none() {
        return Ok(());
    }

    match ctx.missions.complete(mission_id).await {
        Ok(reward) => {
            if (reward.multiplier - 1.0).abs() > f64::EPSILON {
                println!(
                    "🏆 {} complete: +{} coins, +{} XP (x{:.2} booster)",
                    mission_id, reward.coins, reward.xp, reward.multiplier
                );
            } else {
                println!(
                    "🏆 {} complete: +{} coins, +{} XP",
                    mission_id, reward.coins, reward.xp
                );
            }
        }
        Err(MissionServiceError::Rejected(rejection)) => println!("❌ {}", rejection),
        Err(MissionServiceError::Storage(e)) => return Err(e.into()),
    }
    Ok(())
}
