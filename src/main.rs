use anyhow::Result;
use clap::{Parser, Subcommand};
use mealwheel::cli::{self, Context};
use mealwheel::{JsonFileSource, PlanStore};
use time::Date;

/// mealwheel - Rotating meal plans
#[derive(Parser)]
#[command(name = "mealwheel")]
#[command(about = "Browse a repeating multi-week meal plan", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Meal plans JSON document (overrides config file)
    #[arg(long, global = true)]
    plans: Option<String>,

    /// Plan to show instead of the active one
    #[arg(long, global = true)]
    plan: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = cli::parse_date)]
    date: Option<Date>,

    /// Token forwarded to the meal plan source
    #[arg(long, global = true, default_value = "")]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's meals
    Today,
    /// Show the meals a number of days away from today
    Day {
        /// Days to move, negative to go back
        #[arg(long, allow_hyphen_values = true)]
        steps: i64,
    },
    /// Show a whole week of the rotation
    Week {
        /// Rotation week (defaults to the current one)
        #[arg(long)]
        week: Option<u32>,
    },
    /// List meal plans with their rotation length
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = mealwheel::Config::load(args.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealwheel::observability::init_observability(
        "mealwheel",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let ctx = Context {
        source: JsonFileSource::new(args.plans.unwrap_or(config.plans.path)),
        store: PlanStore::new(),
        plan_id: args.plan,
        token: args.token,
        today: args.date.unwrap_or_else(mealwheel_mealplan::today),
        max_weeks: config.schedule.max_weeks,
    };

    let output = match args.command {
        Commands::Today => cli::today(&ctx).await?,
        Commands::Day { steps } => cli::day(&ctx, steps).await?,
        Commands::Week { week } => cli::week(&ctx, week).await?,
        Commands::Summary => cli::summary(&ctx).await?,
    };

    print!("{output}");

    Ok(())
}
