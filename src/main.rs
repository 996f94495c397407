use clap::Parser;
use health_tracker::{cli, config, error, prompt, report, store};
use health_tracker_common::{find_recipe, search, AppState, RecipeListView, CATALOG};
use cli::{Cli, Commands, MealAction, RecipeAction, WaterAction};
use config::Config;
use error::Result;
use std::process::ExitCode;
use store::FileStore;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("health_tracker=debug,health_tracker_common=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_input_error() {
                tracing::error!(error = ?e, "command failed");
            }
            eprintln!("✖ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    match cli.command {
        Commands::Water { action } => {
            let mut store = FileStore::open(&config.resolve_store_path(cli.store.as_deref())?)?;
            let mut state = AppState::load(&store, config.water_goal_ml)?;

            match action {
                WaterAction::Add { amount } => {
                    let added = state.add_custom_water(&mut store, &amount)?;
                    println!("💧 +{} ml", added);
                }
                WaterAction::Quick => {
                    if let Some(amount) = prompt::select_preset(&config.water_presets_ml)? {
                        state.add_water(&mut store, amount)?;
                        println!("💧 +{} ml", amount);
                    }
                }
                WaterAction::Status => {}
            }

            println!("{}", report::format_water_status(&state.water));
            report::water_progress_bar(&state.water).finish();
            if state.water.goal_reached() {
                println!("✔ 目標達成");
            }
        }

        Commands::Meal { action } => {
            let mut store = FileStore::open(&config.resolve_store_path(cli.store.as_deref())?)?;
            let mut state = AppState::load(&store, config.water_goal_ml)?;

            match action {
                MealAction::Log { description, meal_type, photo_url } => {
                    let now_ms = chrono::Utc::now().timestamp_millis();
                    let entry = state.log_meal(&mut store, &meal_type, &description, &photo_url, now_ms)?;
                    println!("✔ 記録しました\n");
                    println!("{}", report::format_food_entry(&entry));
                }
                MealAction::List => {
                    if state.journal.is_empty() {
                        println!("記録はまだありません");
                    }
                    for entry in state.journal.entries() {
                        println!("{}\n", report::format_food_entry(entry));
                    }
                }
            }
        }

        Commands::Recipe { action } => match action {
            RecipeAction::Search { ingredients, select } => {
                let line = match ingredients {
                    Some(line) => line,
                    None => prompt::prompt_ingredients()?,
                };

                let view = RecipeListView::from_search(search(&line, CATALOG))?;
                println!("{}", report::format_recipe_view(&view));

                if select {
                    if let Some(card) = prompt::select_recipe(view.cards())? {
                        println!("\n{}", card.detail());
                    }
                }
            }
            RecipeAction::List => {
                println!("{}", report::format_catalog());
            }
            RecipeAction::Show { name } => {
                let recipe = find_recipe(&name)
                    .ok_or_else(|| error::HealthError::RecipeNotFound(name.clone()))?;
                println!("{}", recipe.detail());
            }
        },

        Commands::Config { set_water_goal, show } => {
            if let Some(goal) = set_water_goal {
                config.set_water_goal(goal)?;
                config.save()?;
                println!("✔ 目標量を設定しました: {} ml", goal);
            }

            if show {
                println!("設定:");
                println!("  目標量: {} ml", config.water_goal_ml);
                println!(
                    "  クイック追加: {}",
                    config
                        .water_presets_ml
                        .iter()
                        .map(|ml| format!("{} ml", ml))
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                println!("  保存ファイル: {}", config.resolve_store_path(cli.store.as_deref())?.display());
            }
        }
    }

    Ok(())
}
