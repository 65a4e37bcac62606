//! Arkeo Query CLI
//!
//! Command-line interface for querying an Arkeo node and working with Arkeo messages.

use anyhow::Result;
use arkeo_cli::commands::{self, query::ListOptions};
use arkeo_cli::config::{self, CliConfig};
use arkeo_cli::input;
use arkeo_lib::RestClient;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arkeo-query")]
#[command(about = "Arkeo Query CLI - Inspect providers, contracts and messages on an Arkeo chain", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// REST gateway URL (can also be set via ARKEO_API env var)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Network: mainnet, testnet or localnet (can also be set via ARKEO_NETWORK env var)
    #[arg(long, global = true)]
    network: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Config file (defaults to <config dir>/arkeo/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the arkeo module parameters
    Params,

    /// Show a provider
    Provider {
        /// Provider public key (bech32)
        pubkey: String,

        /// Service name or id
        service: String,
    },

    /// List providers
    Providers {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a contract
    Contract {
        /// Contract id
        id: u64,
    },

    /// List contracts
    Contracts {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show the open contract between a provider and a spender
    ActiveContract {
        /// Provider public key (bech32)
        provider: String,

        /// Service name or id
        service: String,

        /// Client or delegate public key (bech32)
        spender: String,
    },

    /// Decode a protobuf message to JSON
    Decode {
        /// Type URL; without it DATA is read as a JSON Any
        #[arg(short = 't', long = "type")]
        type_url: Option<String>,

        /// Message bytes (base64, or 0x-prefixed hex), or a JSON Any
        data: String,

        /// Also run stateless validation
        #[arg(long)]
        validate: bool,
    },

    /// Encode a JSON message as protobuf bytes
    Encode {
        /// Type URL, e.g. /arkeo.arkeo.MsgOpenContract
        type_url: String,

        /// JSON message, @file, or - for stdin
        message: String,

        /// Also run stateless validation
        #[arg(long)]
        validate: bool,
    },

    /// Run stateless validation on a JSON message
    Validate {
        /// Type URL, e.g. /arkeo.arkeo.MsgBondProvider
        type_url: String,

        /// JSON message, @file, or - for stdin
        message: String,
    },

    /// List registered message types
    Types {
        /// Only types in this package, e.g. arkeo.claim
        #[arg(short, long)]
        package: Option<String>,
    },

    /// List known services, or show one by name or id
    Services {
        /// Service name or id
        service: Option<String>,

        /// Only services whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args)]
struct PageArgs {
    /// Follow continuation keys and fetch every page
    #[arg(long, conflicts_with_all = ["limit", "key", "offset", "reverse"])]
    all: bool,

    /// Page size
    #[arg(long)]
    limit: Option<u64>,

    /// Continuation key from a previous page (base64)
    #[arg(long)]
    key: Option<String>,

    /// Numeric offset
    #[arg(long)]
    offset: Option<u64>,

    /// Reverse order
    #[arg(long)]
    reverse: bool,
}

impl PageArgs {
    fn into_options(self) -> Result<ListOptions> {
        Ok(ListOptions {
            all: self.all,
            page: input::page_request(self.limit, self.key.as_deref(), self.offset, self.reverse)?,
        })
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Create a config file from the global flags
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("arkeo_cli=debug,arkeo_query=debug,arkeo_lib=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("arkeo_cli=info,arkeo_query=info,arkeo_lib=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = cli.config.clone().or_else(config::default_path);
    let flags = CliConfig {
        api_url: cli.api_url.clone(),
        network: cli.network.clone(),
        timeout_secs: cli.timeout,
        ..Default::default()
    };
    let client = || -> Result<RestClient> {
        let rest = config::resolve(config_path.as_deref(), flags.clone())?;
        tracing::debug!("Using REST gateway {}", rest.api_url);
        Ok(RestClient::new(rest)?)
    };
    let json = cli.json;

    // Dispatch commands
    match cli.command {
        Commands::Params => {
            commands::query::params(&client()?, json).await?;
        }
        Commands::Provider { pubkey, service } => {
            commands::query::provider(&client()?, &pubkey, &service, json).await?;
        }
        Commands::Providers { page } => {
            commands::query::providers(&client()?, page.into_options()?, json).await?;
        }
        Commands::Contract { id } => {
            commands::query::contract(&client()?, id, json).await?;
        }
        Commands::Contracts { page } => {
            commands::query::contracts(&client()?, page.into_options()?, json).await?;
        }
        Commands::ActiveContract {
            provider,
            service,
            spender,
        } => {
            commands::query::active_contract(&client()?, &provider, &service, &spender, json)
                .await?;
        }
        Commands::Decode {
            type_url,
            data,
            validate,
        } => {
            commands::codec::decode(type_url.as_deref(), &data, validate, json)?;
        }
        Commands::Encode {
            type_url,
            message,
            validate,
        } => {
            commands::codec::encode(&type_url, &message, validate, json)?;
        }
        Commands::Validate { type_url, message } => {
            commands::codec::validate(&type_url, &message, json)?;
        }
        Commands::Types { package } => {
            commands::codec::types(package.as_deref(), json)?;
        }
        Commands::Services { service, filter } => match service {
            Some(service) => commands::services::show(&service, json)?,
            None => commands::services::list(filter.as_deref(), json)?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let rest = config::resolve(config_path.as_deref(), flags.clone())?;
                commands::config::show(&rest, config_path.as_deref(), json)?;
            }
            ConfigAction::Init { force } => {
                let path = config_path
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("No config directory; pass --config <path>"))?;
                commands::config::init(&path, flags.clone(), force)?;
            }
        },
    }

    Ok(())
}
