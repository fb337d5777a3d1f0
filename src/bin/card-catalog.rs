//! card-catalog - A command-line client for the trading-card catalog

use card_catalog::api::async_api::Catalog;
use card_catalog::api::{ApiError, ListParams, SearchParams};
use card_catalog::config::Config;
use card_catalog::storage::create_card_store;
use card_catalog::{CardStore, QueryEngine, StorageType};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::{path::PathBuf, process, sync::Arc};

#[derive(Parser)]
#[command(name = "card-catalog")]
#[command(about = "Query a trading-card catalog", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Card directory; implies file storage and overrides the configuration
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of cards
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        /// Only list cards from this set
        #[arg(short, long)]
        set: Option<String>,
    },

    /// Search cards by name
    Search {
        /// Name fragment (at least three characters)
        name: Option<String>,
        /// Only search within this set
        #[arg(short, long)]
        set: Option<String>,
    },

    /// List the set codes present in the catalog
    Sets,

    /// Show a single card
    Show {
        /// Card uuid
        uuid: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.as_ref().map(|p| p.to_string_lossy().into_owned());
    let mut config: Config = card_catalog::init(config_path.as_deref())?.clone();
    if let Some(data) = &cli.data {
        config.storage.storage_type = StorageType::File;
        config.storage.base_path = data.to_string_lossy().into_owned();
        config.validate()?;
    }

    let store: Arc<dyn CardStore> = Arc::from(create_card_store(&config).await?);
    let catalog = Catalog::new(QueryEngine::new(store, Arc::new(config)));

    match cli.command {
        Commands::List { page, set } => {
            let params = ListParams { page: Some(page), set_code: set };
            emit(catalog.list_cards(&params).await)
        }
        Commands::Search { name, set } => {
            let params = SearchParams { name, set_code: set };
            emit(catalog.search_cards(&params).await)
        }
        Commands::Sets => emit(catalog.list_set_codes().await),
        Commands::Show { uuid } => emit(catalog.show_card(&uuid).await),
    }
}

fn emit<T: Serialize>(result: Result<T, ApiError>) -> anyhow::Result<()> {
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err.body());
            process::exit(match err.status() {
                404 => 2,
                _ => 1,
            });
        }
    }
}
