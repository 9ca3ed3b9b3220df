use anyhow::Result;

use cyquest_application::{AppContext, Authorization};
use cyquest_core::Role;
use cyquest_core::profile::RoleStats;

pub async fn login(ctx: &AppContext, role: Role, name: Option<String>) -> Result<()> {
    let record = ctx.sessions.login(role, name).await?;
    println!(
        "✅ Logged in as {} ({}), session {}",
        record.display_name, record.role, record.id
    );
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.sessions.logout().await?;
    println!("👋 Logged out");
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    match ctx.sessions.current().await? {
        Some(record) => {
            println!("{} ({})", record.display_name, record.role);
            println!("  session: {}", record.id);
            println!("  issued:  {}", record.issued_at.to_rfc3339());
        }
        None => println!("Not logged in"),
    }
    Ok(())
}

pub async fn dashboard(ctx: &AppContext, role: Role) -> Result<()> {
    match ctx.sessions.authorize(role).await? {
        Authorization::Granted(profile) => {
            println!("📊 {} dashboard", role);
            println!(
                "  {} - {} (level {}, {} XP, {}-day streak)",
                profile.name, profile.title, profile.level, profile.xp, profile.streak_days
            );
            match profile.stats {
                RoleStats::Student {
                    courses_completed,
                    badges_earned,
                    class_rank,
                } => println!(
                    "  {} courses completed, {} badges, class rank #{}",
                    courses_completed, badges_earned, class_rank
                ),
                RoleStats::Teacher {
                    classes,
                    students,
                    avg_completion_percent,
                } => println!(
                    "  {} classes, {} students, {}% average completion",
                    classes, students, avg_completion_percent
                ),
                RoleStats::Corporate {
                    team_size,
                    compliance_percent,
                    open_risks,
                } => println!(
                    "  team of {}, {}% compliant, {} open risks",
                    team_size, compliance_percent, open_risks
                ),
            }
        }
        Authorization::Denied { reason, .. } => {
            println!("🔒 {} - redirecting to login", reason);
            println!("💡 Try: cyquest login {}", role);
        }
    }
    Ok(())
}
