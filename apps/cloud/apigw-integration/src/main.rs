//! API Gateway Integration reader
//!
//! Runs the `aws_apigatewayv2_integration` data source once and prints the
//! resulting state as JSON on stdout. Diagnostics go to stderr and make the
//! process exit non-zero.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_apigateway::integration::TYPE_NAME;
use domain_apigateway::{
    Config as DataSourceConfig, DataSourceRegistry, HttpIntegrationClient, IntegrationDataSource,
    ReadRequest,
};
use eyre::{Result, WrapErr, bail};
use serde_json::{Map, Value};
use tracing::info;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "apigw-integration")]
#[command(about = "Read API Gateway V2 integrations as a Terraform data source")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one integration and print the resulting state
    Read {
        /// API identifier
        #[arg(long, conflicts_with_all = ["config", "config_file"])]
        api_id: Option<String>,

        /// Integration identifier
        #[arg(long, conflicts_with_all = ["config", "config_file"])]
        integration_id: Option<String>,

        /// Full data source configuration as a JSON object
        #[arg(long, conflicts_with = "config_file")]
        config: Option<String>,

        /// Read the JSON configuration from a file
        #[arg(long)]
        config_file: Option<PathBuf>,

        /// Override the API Gateway endpoint (APIGATEWAY_ENDPOINT)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Print the schema of every registered data source
    Schema,
}

/// Build the configuration object from flags, inline JSON or a file
fn data_source_config(
    api_id: Option<String>,
    integration_id: Option<String>,
    config: Option<String>,
    config_file: Option<PathBuf>,
) -> Result<Value> {
    if let Some(raw) = config {
        return serde_json::from_str(&raw).wrap_err("--config is not valid JSON");
    }

    if let Some(path) = config_file {
        let raw = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        return serde_json::from_str(&raw)
            .wrap_err_with(|| format!("{} is not valid JSON", path.display()));
    }

    let mut object = Map::new();
    if let Some(api_id) = api_id {
        object.insert("api_id".to_string(), Value::String(api_id));
    }
    if let Some(integration_id) = integration_id {
        object.insert("integration_id".to_string(), Value::String(integration_id));
    }
    Ok(Value::Object(object))
}

fn registry(config: &Config) -> Result<DataSourceRegistry> {
    let client = HttpIntegrationClient::new(config.apigateway.clone())
        .wrap_err("Failed to build API Gateway client")?;

    let mut registry = DataSourceRegistry::new();
    registry.register(Box::new(IntegrationDataSource::new(client)));
    Ok(registry)
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    match cli.command {
        Commands::Read {
            api_id,
            integration_id,
            config: inline,
            config_file,
            endpoint,
        } => {
            let config = config.with_endpoint(endpoint);
            let raw = data_source_config(api_id, integration_id, inline, config_file)?;

            info!(endpoint = %config.apigateway.endpoint, "Reading {}", TYPE_NAME);
            let response = registry(&config)?
                .read(TYPE_NAME, ReadRequest::new(DataSourceConfig::new(raw)))
                .await;

            for diagnostic in &response.diagnostics {
                eprintln!("{}\n", diagnostic);
            }
            if response.diagnostics.has_error() {
                bail!(
                    "{} failed with {} error diagnostic(s)",
                    TYPE_NAME,
                    response.diagnostics.error_count()
                );
            }

            println!("{}", serde_json::to_string_pretty(&response.state)?);
        }

        Commands::Schema => {
            let registry = registry(&config)?;
            println!("{}", serde_json::to_string_pretty(&registry.schemas())?);
        }
    }

    Ok(())
}
