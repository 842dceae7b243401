use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use diet_planner_rs::catalog::{CatalogGateway, FileCatalog, RestCatalog};
use diet_planner_rs::cli::{Cli, Command, ProfileArgs};
use diet_planner_rs::error::Result;
use diet_planner_rs::interface::{
    collect_user_profile, display_diet_plan, display_meal_list, prompt_yes_no,
};
use diet_planner_rs::models::{Goal, Meal, UserProfile};
use diet_planner_rs::planner::{calculate_daily_calories, generate_diet_plan};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = build_catalog(&cli);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(catalog.as_ref(), &args).await,
        Command::Meals => cmd_meals(catalog.as_ref()).await,
    }
}

/// Pick the catalog backend: remote when --url is given, local file otherwise.
fn build_catalog(cli: &Cli) -> Box<dyn CatalogGateway> {
    match (&cli.url, &cli.api_key) {
        (Some(url), Some(key)) => {
            debug!(%url, "using remote meal catalog");
            Box::new(RestCatalog::new(url.clone(), key.clone()))
        }
        (Some(url), None) => {
            debug!(%url, "using remote meal catalog without api key");
            Box::new(RestCatalog::new(url.clone(), String::new()))
        }
        (None, _) => {
            debug!(file = %cli.file, "using local meal catalog");
            Box::new(FileCatalog::new(cli.file.clone()))
        }
    }
}

/// Generate and display a diet plan, looping until the user is done.
async fn cmd_plan(catalog: &dyn CatalogGateway, args: &ProfileArgs) -> Result<()> {
    // Flags skip the form entirely; a flag-driven run produces one plan.
    if let Some(profile) = args.to_profile()? {
        return plan_once(catalog, &profile).await;
    }

    loop {
        let profile = collect_user_profile()?;
        plan_once(catalog, &profile).await?;

        // The previous plan is simply dropped; nothing is persisted.
        if !prompt_yes_no("Generate another plan?", false)? {
            break;
        }
        println!();
    }

    Ok(())
}

async fn plan_once(catalog: &dyn CatalogGateway, profile: &UserProfile) -> Result<()> {
    let target = calculate_daily_calories(profile);
    println!();
    println!(
        "Daily target for {} / {}: {} kcal",
        profile.goal, profile.activity, target
    );

    let plan = generate_diet_plan(catalog, profile).await?;
    display_diet_plan(&plan, target);

    Ok(())
}

/// Fetch the whole catalog by querying every goal tag and deduplicating.
///
/// "all"-tagged meals come back from every fetch; only their first
/// occurrence is kept.
async fn collect_catalog_meals(catalog: &dyn CatalogGateway) -> Result<Vec<Meal>> {
    let mut meals = catalog.fetch_meals(Goal::Maintenance).await?;
    for goal in [Goal::WeightLoss, Goal::MuscleGain] {
        let extra = catalog.fetch_meals(goal).await?;
        let fresh: Vec<Meal> = extra
            .into_iter()
            .filter(|m| !meals.iter().any(|seen| seen.id == m.id))
            .collect();
        meals.extend(fresh);
    }
    Ok(meals)
}

/// List every meal in the catalog, without filtering.
async fn cmd_meals(catalog: &dyn CatalogGateway) -> Result<()> {
    let meals = collect_catalog_meals(catalog).await?;
    display_meal_list(&meals, "Meal catalog");
    Ok(())
}
