//! Query commands - read chain state through the REST gateway

use anyhow::{Context, Result};
use arkeo_lib::proto::PageRequest;
use arkeo_lib::RestClient;

use super::{contract_line, provider_line, show_contract, show_provider};
use crate::input;
use crate::ui;

/// Flags shared by the list commands.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub all: bool,
    pub page: Option<PageRequest>,
}

#[tracing::instrument(skip(client))]
pub async fn params(client: &RestClient, json: bool) -> Result<()> {
    let spinner = ui::spinner("Fetching module parameters...");
    let result = client.params().await;
    spinner.finish_and_clear();
    let params = result.context("Failed to fetch module parameters")?;

    if json {
        return ui::json(&params);
    }

    ui::header("Module Parameters");
    ui::key_value("Community pool", &params.community_pool_percentage);
    ui::key_value("Dev fund", &params.dev_fund_percentage);
    ui::key_value("Grant fund", &params.grant_fund_percentage);
    ui::key_value("Inflation change", &params.inflation_change_percentage);
    ui::key_value("Inflation min", &params.inflation_min);
    ui::key_value("Inflation max", &params.inflation_max);
    ui::key_value("Goal bonded", &params.goal_bonded);
    ui::key_value("Blocks per year", &params.block_per_year.to_string());
    ui::key_value("Emission curve", &params.emission_curve.to_string());
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn provider(client: &RestClient, pubkey: &str, service: &str, json: bool) -> Result<()> {
    let service = input::service_name(service)?;

    let spinner = ui::spinner("Fetching provider...");
    let result = client.provider(pubkey, &service).await;
    spinner.finish_and_clear();
    let provider = result.with_context(|| format!("Failed to fetch provider {}/{}", pubkey, service))?;

    if json {
        return ui::json(&provider);
    }

    ui::header("Provider");
    show_provider(&provider);
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn providers(client: &RestClient, options: ListOptions, json: bool) -> Result<()> {
    let spinner = ui::spinner("Fetching providers...");
    let (providers, next_key) = if options.all {
        let all = client.all_providers().await;
        spinner.finish_and_clear();
        (all.context("Failed to list providers")?, None)
    } else {
        let page = client.providers(options.page).await;
        spinner.finish_and_clear();
        let page = page.context("Failed to list providers")?;
        let next_key = page.pagination.filter(|p| p.has_next()).map(|p| p.next_key);
        (page.provider, next_key)
    };
    tracing::debug!("Fetched {} providers", providers.len());

    if json {
        return ui::json(&providers);
    }

    ui::header("Providers");
    if providers.is_empty() {
        ui::info("No providers found");
        return Ok(());
    }
    for provider in &providers {
        println!("  {}", provider_line(provider));
    }
    let next_key = next_key.map(|key| input::encode_base64(&key));
    ui::list_footer(providers.len(), "provider", next_key.as_deref());
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn contract(client: &RestClient, id: u64, json: bool) -> Result<()> {
    let spinner = ui::spinner("Fetching contract...");
    let result = client.contract(id).await;
    spinner.finish_and_clear();
    let contract = result.with_context(|| format!("Failed to fetch contract {}", id))?;

    if json {
        return ui::json(&contract);
    }

    ui::header(&format!("Contract {}", id));
    show_contract(&contract);
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn contracts(client: &RestClient, options: ListOptions, json: bool) -> Result<()> {
    let spinner = ui::spinner("Fetching contracts...");
    let (contracts, next_key) = if options.all {
        let all = client.all_contracts().await;
        spinner.finish_and_clear();
        (all.context("Failed to list contracts")?, None)
    } else {
        let page = client.contracts(options.page).await;
        spinner.finish_and_clear();
        let page = page.context("Failed to list contracts")?;
        let next_key = page.pagination.filter(|p| p.has_next()).map(|p| p.next_key);
        (page.contract, next_key)
    };
    tracing::debug!("Fetched {} contracts", contracts.len());

    if json {
        return ui::json(&contracts);
    }

    ui::header("Contracts");
    if contracts.is_empty() {
        ui::info("No contracts found");
        return Ok(());
    }
    for contract in &contracts {
        println!("  {}", contract_line(contract));
    }
    let next_key = next_key.map(|key| input::encode_base64(&key));
    ui::list_footer(contracts.len(), "contract", next_key.as_deref());
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn active_contract(
    client: &RestClient,
    provider: &str,
    service: &str,
    spender: &str,
    json: bool,
) -> Result<()> {
    let service = input::service_name(service)?;

    let spinner = ui::spinner("Fetching active contract...");
    let result = client.active_contract(provider, &service, spender).await;
    spinner.finish_and_clear();
    let contract = result.context("Failed to fetch active contract")?;

    if json {
        return ui::json(&contract);
    }

    ui::header("Active Contract");
    show_contract(&contract);
    Ok(())
}
