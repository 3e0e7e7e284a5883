//! Advocates CLI
//!
//! Search, seed and browse the advocates directory from a terminal.

use advocates_client::{AdvocatesClient, CardView, Filters, YearsBucket};
use clap::{Parser, Subcommand};
use core_config::Environment;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::Result;
use tracing::info;

mod browse;
mod render;

#[derive(Debug, Parser)]
#[command(name = "advocates-cli")]
#[command(about = "Search and browse the advocates directory")]
struct Cli {
    /// Base URL of the advocates API
    #[arg(long, env = "ADVOCATES_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch one page of results
    Search {
        /// Matched against names, city, degree and specialties
        #[arg(short, long, default_value = "")]
        term: String,

        #[arg(short, long, default_value_t = 1)]
        page: u64,

        #[arg(short = 's', long, default_value_t = 20)]
        page_size: u64,

        /// Keep only advocates in this city
        #[arg(long)]
        city: Option<String>,

        /// Keep only advocates with this degree
        #[arg(long)]
        degree: Option<String>,

        /// Keep only advocates in this experience bucket (1-5, 6-10, 10+)
        #[arg(long)]
        years: Option<YearsBucket>,

        /// Show every specialty instead of only the matching ones
        #[arg(short, long)]
        all: bool,
    },

    /// Insert the sample advocates
    Seed,

    /// Interactive search with infinite scroll
    Browse {
        #[arg(short = 's', long, default_value_t = 5)]
        page_size: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env());

    let cli = Cli::parse();
    let client = AdvocatesClient::new(cli.api_url)?;

    match cli.command {
        Commands::Search {
            term,
            page,
            page_size,
            city,
            degree,
            years,
            all,
        } => {
            let rows = client.search(&term, page, page_size).await?;
            let filters = Filters {
                city,
                degree,
                years,
            };
            let cards: Vec<CardView<'_>> = filters
                .apply(&rows)
                .into_iter()
                .map(|advocate| CardView::new(advocate, term.trim(), all))
                .collect();
            print!("{}", render::cards(&cards));
        }

        Commands::Seed => {
            let inserted = client.seed().await?;
            info!(inserted = inserted.len(), "Seed complete");
            println!("Inserted {} advocates", inserted.len());
        }

        Commands::Browse { page_size } => {
            browse::run(&client, page_size).await?;
        }
    }

    Ok(())
}
