use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use prospector_client::{fetch_page, ProspectorClient};
use prospector_core::load_app_config;
use prospector_core::query::to_clauses;
use prospector_core::types::{Company, FilterCriteria, DEFAULT_MAX_EMPLOYEES};

#[derive(Debug, Parser)]
#[command(name = "prospector-cli")]
#[command(about = "Company prospector command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a prospect search and print the normalized page.
    Search(SearchArgs),
    /// Count the matches for a set of criteria without fetching them.
    Preview(SearchArgs),
    /// List the filter definitions the provider supports.
    Filters,
    /// Submit a JSON file of companies as leads.
    Leads {
        /// Path to a JSON array of normalized companies.
        file: PathBuf,
    },
    /// Show the authenticated account details.
    Account,
    /// Check whether the configured credentials are accepted.
    ValidateLogin,
    /// Fetch the unauthenticated landing page content.
    Landing,
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    branch: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value_t = 0)]
    min_employees: u32,
    #[arg(long, default_value_t = DEFAULT_MAX_EMPLOYEES)]
    max_employees: u32,
    #[arg(long, default_value_t = 0)]
    skip: usize,
    #[arg(long, default_value_t = 25)]
    take: usize,
}

impl SearchArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            address: self.address.clone(),
            branch: self.branch.clone(),
            city: self.city.clone(),
            min_employees: self.min_employees,
            max_employees: self.max_employees,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_app_config()?;
    tracing::debug!(mode = %config.mode, base_url = %config.base_url, "building client");
    let client = ProspectorClient::from_config(&config)?;

    match cli.command {
        Commands::Search(args) => {
            let page = fetch_page(&client, &args.criteria(), args.skip, args.take).await?;
            print_json(&page)?;
        }
        Commands::Preview(args) => {
            let preview = client.preview_filters(&to_clauses(&args.criteria())).await?;
            print_json(&preview)?;
        }
        Commands::Filters => {
            let filters = client.get_search_filters().await?;
            print_json(&filters)?;
        }
        Commands::Leads { file } => {
            let text = std::fs::read_to_string(&file)?;
            let companies: Vec<Company> = serde_json::from_str(&text)?;
            let receipt = client.create_leads(&companies).await?;
            print_json(&receipt)?;
        }
        Commands::Account => {
            let details = client.account_details().await?;
            print_json(&details)?;
        }
        Commands::ValidateLogin => {
            let status = client.validate_login().await?;
            print_json(&status)?;
        }
        Commands::Landing => {
            let page = client.get_landing_page_information().await?;
            print_json(&page)?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
