use anyhow::Result;
use clap::{Parser, Subcommand};
use ojakh_http::{create_router, AppState};
use ojakh_storage::{ChordDb, ChordStore, IngredientStore, RecipeDb, RecipeStore};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ojakh")]
#[command(about = "HTTP services for the Ojakh recipe catalog and the Nvag chord reference", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (recipes + chords).
    Serve {
        #[arg(short, long, default_value = "4000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print all recipes as JSON.
    Recipes,
    /// Print all ingredient names as JSON.
    Ingredients,
    /// Print all categories as JSON.
    Categories,
    /// Print all chords as JSON.
    Chords,
}

fn recipes_url() -> Result<String> {
    std::env::var("OJAKH_DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("OJAKH_DATABASE_URL environment variable must be set"))
}

fn chords_url() -> Result<String> {
    std::env::var("NVAG_DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("NVAG_DATABASE_URL environment variable must be set"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            let recipes = Arc::new(RecipeDb::new(&recipes_url()?).await?);
            let chords = Arc::new(ChordDb::new(&chords_url()?).await?);
            let state = Arc::new(AppState { recipes, chords });
            let router = create_router(state);
            let addr = format!("{}:{}", host, port);
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        }
        Commands::Recipes => {
            let db = RecipeDb::new(&recipes_url()?).await?;
            println!("{}", serde_json::to_string_pretty(&db.list_recipes().await?)?);
        }
        Commands::Ingredients => {
            let db = RecipeDb::new(&recipes_url()?).await?;
            println!("{}", serde_json::to_string_pretty(&db.list_ingredient_names().await?)?);
        }
        Commands::Categories => {
            let db = RecipeDb::new(&recipes_url()?).await?;
            println!("{}", serde_json::to_string_pretty(&db.list_categories().await?)?);
        }
        Commands::Chords => {
            let db = ChordDb::new(&chords_url()?).await?;
            println!("{}", serde_json::to_string_pretty(&db.list_chords().await?)?);
        }
    }

    Ok(())
}
