//! CLI command implementations

pub mod codec;
pub mod config;
pub mod query;
pub mod services;

use arkeo_lib::proto::arkeo::{Contract, Provider};
use arkeo_lib::proto::json::ProtoEnum;
use arkeo_lib::proto::Coin;
use arkeo_lib::service::name_of;
use colored::Colorize;

use crate::ui;

/// `"5uarkeo, 7uarkeo"`, or `-` for no coins.
pub fn format_coins(coins: &[Coin]) -> String {
    if coins.is_empty() {
        return "-".to_string();
    }
    coins
        .iter()
        .map(|coin| coin.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"btc-mainnet-fullnode (10)"`
pub fn format_service(id: i32) -> String {
    format!("{} ({})", name_of(id), id)
}

fn format_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        "-".to_string()
    } else {
        hex::encode(bytes)
    }
}

/// Detailed view of a provider.
pub fn show_provider(provider: &Provider) {
    let status = if provider.is_online() {
        provider.status().as_str_name().green().to_string()
    } else {
        provider.status().as_str_name().red().to_string()
    };

    ui::key_value("Public key", &format_bytes(&provider.pub_key));
    ui::key_value("Service", &format_service(provider.service));
    ui::key_value("Status", &status);
    ui::key_value("Bond", &provider.bond);
    ui::key_value(
        "Metadata",
        &format!("{} (nonce {})", provider.metadata_uri, provider.metadata_nonce),
    );
    ui::key_value(
        "Contract duration",
        &format!(
            "{} - {} blocks",
            provider.min_contract_duration, provider.max_contract_duration
        ),
    );
    ui::key_value("Subscription rate", &format_coins(&provider.subscription_rate));
    ui::key_value("Pay-as-you-go rate", &format_coins(&provider.pay_as_you_go_rate));
    ui::key_value(
        "Settlement duration",
        &provider.settlement_duration.to_string(),
    );
    ui::key_value("Last update", &provider.last_update.to_string());
}

/// One-line summary of a provider for listings.
pub fn provider_line(provider: &Provider) -> String {
    let status = if provider.is_online() {
        "ONLINE ".green()
    } else {
        "OFFLINE".red()
    };
    format!(
        "{} {} {}",
        status,
        format_service(provider.service),
        format_bytes(&provider.pub_key).dimmed()
    )
}

/// Detailed view of a contract.
pub fn show_contract(contract: &Contract) {
    let rate = contract
        .rate
        .as_ref()
        .map(|coin| coin.to_string())
        .unwrap_or_else(|| "-".to_string());

    ui::key_value("Id", &contract.id.to_string());
    ui::key_value("Provider", &format_bytes(&contract.provider));
    ui::key_value("Service", &format_service(contract.service));
    ui::key_value("Client", &format_bytes(&contract.client));
    ui::key_value("Delegate", &format_bytes(&contract.delegate));
    ui::key_value("Type", contract.contract_type().as_str_name());
    ui::key_value("Authorization", contract.authorization().as_str_name());
    ui::key_value("Rate", &rate);
    ui::key_value("Deposit", &contract.deposit);
    ui::key_value("Paid", &contract.paid);
    ui::key_value("Nonce", &contract.nonce.to_string());
    ui::key_value("Queries per minute", &contract.queries_per_minute.to_string());
    ui::key_value(
        "Height",
        &format!(
            "{} (expires {}, settles by {})",
            contract.height,
            contract.expiration(),
            contract.settlement_period_end()
        ),
    );
    ui::key_value("Settlement height", &contract.settlement_height.to_string());
}

/// One-line summary of a contract for listings.
pub fn contract_line(contract: &Contract) -> String {
    format!(
        "#{} {} {} height {} +{}",
        contract.id.to_string().bold(),
        contract.contract_type().as_str_name(),
        format_service(contract.service),
        contract.height,
        contract.duration
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coins() {
        assert_eq!(format_coins(&[]), "-");
        assert_eq!(
            format_coins(&[Coin::new("uarkeo", "5"), Coin::new("uarkeo", "7")]),
            "5uarkeo, 7uarkeo"
        );
    }

    #[test]
    fn test_format_service() {
        assert_eq!(format_service(10), "btc-mainnet-fullnode (10)");
        assert_eq!(format_service(999), "unknown (999)");
    }

    #[test]
    fn test_contract_line_mentions_id() {
        colored::control::set_override(false);
        let contract = Contract {
            id: 42,
            service: 10,
            height: 100,
            duration: 50,
            ..Default::default()
        };
        let line = contract_line(&contract);
        assert!(line.starts_with("#42 SUBSCRIPTION"));
        assert!(line.contains("btc-mainnet-fullnode"));
    }
}
