use crate::config::{ClientConfig, Environment};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "straddle")]
#[command(about = "Command line access to the Straddle payments API")]
pub struct CliConfig {
    /// TOML file with client settings; flags and environment override it.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, env = "STRADDLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, value_enum, env = "STRADDLE_ENVIRONMENT")]
    pub environment: Option<Environment>,

    #[arg(long, env = "STRADDLE_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "STRADDLE_ACCOUNT_ID")]
    pub account_id: Option<String>,

    #[arg(long, help = "Fail when a response does not match its model")]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Charge,
    Payout,
    Customer,
    Paykey,
    Account,
    Organization,
    FundingEvent,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch one resource by id
    Get { resource: Resource, id: String },
    /// Fetch one page of a resource collection
    List {
        resource: Resource,
        #[arg(long)]
        page_number: Option<i64>,
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Run a report
    Report {
        #[arg(value_enum)]
        report: Report,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Report {
    CustomersByStatus,
}

impl CliConfig {
    /// Merges the optional config file with flag values; flags win.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::new(validate_required_field("api_key", &self.api_key)?.clone()),
        };
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(environment) = self.environment {
            config.environment = environment;
        }
        if self.base_url.is_some() {
            config.base_url = self.base_url.clone();
        }
        if self.account_id.is_some() {
            config.account_id = self.account_id.clone();
        }
        if self.strict {
            config.response_validation = true;
        }
        Ok(config)
    }
}
