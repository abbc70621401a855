use clap::Parser;
use serde_json::Value;
use straddle::config::cli::{Command, Report, Resource};
use straddle::models::{
    AccountListParams, CustomerListParams, FundingEventListParams, OrganizationListParams,
    PaykeyListParams, PayoutListParams,
};
use straddle::utils::logger;
use straddle::{CliConfig, ErrorCategory, Result, StraddleClient, StraddleError};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Command failed: {} (category: {:?})", e, e.category());
            eprintln!("error: {}", e);
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}

fn exit_code(error: &StraddleError) -> i32 {
    match error.category() {
        ErrorCategory::Configuration => 2,
        ErrorCategory::Network => 3,
        ErrorCategory::Api => 4,
        ErrorCategory::Validation | ErrorCategory::Serialization => 1,
    }
}

async fn run(cli: &CliConfig) -> Result<String> {
    let client = StraddleClient::new(cli.client_config()?)?;
    tracing::info!("Using {}", client.base_url());

    let value = match &cli.command {
        Command::Get { resource, id } => get(&client, *resource, id).await?,
        Command::List {
            resource,
            page_number,
            page_size,
        } => list(&client, *resource, *page_number, *page_size).await?,
        Command::Report {
            report: Report::CustomersByStatus,
        } => serde_json::to_value(client.reports().total_customers_by_status().await?)?,
    };

    Ok(serde_json::to_string_pretty(&value)?)
}

async fn get(client: &StraddleClient, resource: Resource, id: &str) -> Result<Value> {
    let value = match resource {
        Resource::Charge => serde_json::to_value(client.charges().get(id).await?)?,
        Resource::Payout => serde_json::to_value(client.payouts().get(id).await?)?,
        Resource::Customer => serde_json::to_value(client.customers().get(id).await?)?,
        Resource::Paykey => serde_json::to_value(client.paykeys().get(id).await?)?,
        Resource::Account => serde_json::to_value(client.accounts().get(id).await?)?,
        Resource::Organization => serde_json::to_value(client.organizations().get(id).await?)?,
        Resource::FundingEvent => serde_json::to_value(client.funding_events().get(id).await?)?,
    };
    Ok(value)
}

async fn list(
    client: &StraddleClient,
    resource: Resource,
    page_number: Option<i64>,
    page_size: Option<i64>,
) -> Result<Value> {
    let value = match resource {
        Resource::Charge => {
            return Err(StraddleError::InvalidConfigValueError {
                field: "resource".to_string(),
                value: "charge".to_string(),
                reason: "Charges cannot be listed; use `get charge <id>`".to_string(),
            })
        }
        Resource::Payout => {
            let mut params = PayoutListParams::new();
            params.set_page_number(page_number).set_page_size(page_size);
            serde_json::to_value(client.payouts().list(&params).await?)?
        }
        Resource::Customer => {
            let mut params = CustomerListParams::new();
            params.set_page_number(page_number).set_page_size(page_size);
            serde_json::to_value(client.customers().list(&params).await?)?
        }
        Resource::Paykey => {
            let mut params = PaykeyListParams::new();
            params.set_page_number(page_number).set_page_size(page_size);
            serde_json::to_value(client.paykeys().list(&params).await?)?
        }
        Resource::Account => {
            let mut params = AccountListParams::new();
            params.set_page_number(page_number).set_page_size(page_size);
            serde_json::to_value(client.accounts().list(&params).await?)?
        }
        Resource::Organization => {
            let mut params = OrganizationListParams::new();
            params.set_page_number(page_number).set_page_size(page_size);
            serde_json::to_value(client.organizations().list(&params).await?)?
        }
        Resource::FundingEvent => {
            let mut params = FundingEventListParams::new();
            params.set_page_number(page_number).set_page_size(page_size);
            serde_json::to_value(client.funding_events().list(&params).await?)?
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use straddle::ClientConfig;

    #[test]
    fn test_exit_code_per_category() {
        let validation = StraddleError::MissingRequiredField {
            field: "id".to_string(),
        };
        let serialization =
            StraddleError::from(serde_json::from_str::<Value>("{").unwrap_err());
        let configuration = StraddleError::MissingConfigError {
            field: "api_key".to_string(),
        };
        let network = StraddleError::from(
            reqwest::Client::new()
                .get("not a url")
                .build()
                .unwrap_err(),
        );
        let api = StraddleError::Api {
            status: 500,
            message: "boom".to_string(),
            body: String::new(),
        };

        assert_eq!(exit_code(&validation), 1);
        assert_eq!(exit_code(&serialization), 1);
        assert_eq!(exit_code(&configuration), 2);
        assert_eq!(network.category(), ErrorCategory::Network);
        assert_eq!(exit_code(&network), 3);
        assert_eq!(exit_code(&api), 4);
    }

    #[tokio::test]
    async fn test_list_charges_is_rejected_before_any_request() {
        let mut config = ClientConfig::new("sk_test_cli");
        config.base_url = Some("http://127.0.0.1:9".to_string());
        let client = StraddleClient::new(config).unwrap();

        let error = list(&client, Resource::Charge, Some(1), Some(10))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            StraddleError::InvalidConfigValueError { ref field, ref value, .. }
                if field == "resource" && value == "charge"
        ));
        assert_eq!(exit_code(&error), 2);
    }
}
