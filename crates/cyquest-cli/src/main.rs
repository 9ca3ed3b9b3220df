use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cyquest_application::AppContext;
use cyquest_core::Role;

mod commands;

#[derive(Parser)]
#[command(name = "cyquest")]
#[command(about = "CyQuest CLI - gamified cybersecurity training, locally", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a session with the given role
    Login {
        /// Role to log in as (student, teacher, corporate)
        role: Role,
        /// Display name for the session record
        #[arg(long)]
        name: Option<String>,
    },
    /// End the current session
    Logout,
    /// Show the raw session record
    Whoami,
    /// Open a role's dashboard (runs the session gate)
    Dashboard {
        /// Role the dashboard requires
        role: Role,
    },
    /// Student shop: cosmetics, boosters and premium items
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
    /// Course catalog and enrollment
    Courses {
        #[command(subcommand)]
        action: CourseAction,
    },
    /// Mission board and rewards
    Missions {
        #[command(subcommand)]
        action: MissionAction,
    },
}

#[derive(Subcommand)]
enum ShopAction {
    /// List the catalog
    List,
    /// Show balance, owned items, loadout and booster
    Status,
    /// Purchase an item by id
    Buy { item_id: String },
    /// Equip an owned item by id
    Equip { item_id: String },
    /// Restore the default loadout
    Reset,
}

#[derive(Subcommand)]
enum CourseAction {
    /// List the course catalog with enrollment marks
    List,
    /// Enroll in a course by id
    Enroll { course_id: String },
    /// Drop a course by id
    Drop { course_id: String },
}

#[derive(Subcommand)]
enum MissionAction {
    /// List missions with completion marks
    List,
    /// Complete a mission and collect its rewards
    Complete { mission_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = AppContext::init().await?;

    let default_level = ctx.config.get_config().debug.log_level;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Login { role, name } => commands::session::login(&ctx, role, name).await?,
        Commands::Logout => commands::session::logout(&ctx).await?,
        Commands::Whoami => commands::session::whoami(&ctx).await?,
        Commands::Dashboard { role } => commands::session::dashboard(&ctx, role).await?,
        Commands::Shop { action } => match action {
            ShopAction::List => commands::shop::list(&ctx).await?,
            ShopAction::Status => commands::shop::status(&ctx).await?,
            ShopAction::Buy { item_id } => commands::shop::buy(&ctx, &item_id).await?,
            ShopAction::Equip { item_id } => commands::shop::equip(&ctx, &item_id).await?,
            ShopAction::Reset => commands::shop::reset(&ctx).await?,
        },
        Commands::Courses { action } => match action {
            CourseAction::List => commands::courses::list(&ctx).await?,
            CourseAction::Enroll { course_id } => {
                commands::courses::enroll(&ctx, &course_id).await?
            }
            CourseAction::Drop { course_id } => commands::courses::drop(&ctx, &course_id).await?,
        },
        Commands::Missions { action } => match action {
            MissionAction::List => commands::missions::list(&ctx).await?,
            MissionAction::Complete { mission_id } => {
                commands::missions::complete(&ctx, &mission_id).await?
            }
        },
    }

    Ok(())
}
