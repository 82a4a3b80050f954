use std::sync::Arc;

use clap::Parser;
use crosssell::application::matrix_filter::{parse_score, MatrixFilter, MatrixQuery};
use crosssell::cli::commands::{Cli, Commands};
use crosssell::config::{EngineConfig, LogFormat};
use crosssell::infrastructure::dataset::CrmDataset;
use crosssell::infrastructure::http;
use crosssell::infrastructure::sqlite::crm_repo::SqliteCrmRepo;
use crosssell::CrossSell;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crosssell=info"));
    let fmt = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt.json())
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    init_logging(config.log_format);

    let store = match SqliteCrmRepo::open(&config.db_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(db_path = %config.db_path, error = %e, "failed to open database");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(store, &config, cli.command).await {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

async fn run_command(
    store: Arc<SqliteCrmRepo>,
    config: &EngineConfig,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = CrossSell::with_store(store.clone(), config);

    match cmd {
        Commands::Matrix {
            client_id,
            industry,
            region,
            source_bu,
            target_bu,
            min_score,
            limit,
        } => {
            let filter = MatrixFilter::try_from(MatrixQuery {
                client_id,
                client_industry: industry,
                client_region: region,
                source_business_unit_id: source_bu,
                target_business_unit_id: target_bu,
                min_opportunity_score: min_score,
                limit,
            })?;
            print_json(&app.matrix(filter).await?)?;
        }
        Commands::High { min_score } => {
            let min = min_score
                .map(|raw| parse_score("min-score", &raw))
                .transpose()?;
            print_json(&app.high_opportunity_matrix(min).await?)?;
        }
        Commands::Client { id } => print_json(&app.matrix_for_client(&id).await?)?,
        Commands::SourceBu { id } => {
            print_json(&app.matrix_for_source_business_unit(&id).await?)?
        }
        Commands::TargetBu { id } => {
            print_json(&app.matrix_for_target_business_unit(&id).await?)?
        }
        Commands::Industry { name } => print_json(&app.matrix_for_industry(&name).await?)?,
        Commands::Region { name } => print_json(&app.matrix_for_region(&name).await?)?,
        Commands::Summary => print_json(&app.summary(MatrixFilter::default()).await?)?,
        Commands::Explain {
            client_id,
            target_bu,
        } => match app.explain(&client_id, &target_bu).await? {
            Some(scored) => print_json(&scored)?,
            None => println!("No cross-sell candidate for client {client_id} into {target_bu}"),
        },
        Commands::Import { path } => {
            let raw = std::fs::read_to_string(&path)?;
            let dataset = CrmDataset::from_json(&raw)?;
            let counts = store.import(&dataset)?;
            print_json(&counts)?;
        }
        Commands::Serve { bind } => {
            let address = bind.unwrap_or_else(|| config.bind_address.clone());
            http::serve(&address, Arc::new(app)).await?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
