//! Services command - list the known service table

use anyhow::{anyhow, Result};
use arkeo_lib::Service;
use serde::Serialize;

use crate::ui;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub id: i32,
    pub name: &'static str,
}

/// Services whose name contains `filter`, ordered by id.
pub fn matching(filter: Option<&str>) -> Vec<ServiceEntry> {
    let filter = filter.map(|f| f.to_ascii_lowercase());
    let mut entries: Vec<ServiceEntry> = Service::all()
        .filter(|service| {
            filter
                .as_deref()
                .map_or(true, |f| service.name().contains(f))
        })
        .map(|service| ServiceEntry {
            id: service.id(),
            name: service.name(),
        })
        .collect();
    entries.sort_by_key(|entry| entry.id);
    entries
}

#[tracing::instrument]
pub fn list(filter: Option<&str>, json: bool) -> Result<()> {
    let entries = matching(filter);

    if json {
        return ui::json(&entries);
    }

    ui::header("Services");
    if entries.is_empty() {
        ui::info("No services match");
        return Ok(());
    }
    for entry in &entries {
        ui::key_value(&format!("{:>3}", entry.id), entry.name);
    }
    Ok(())
}

/// Look up one service by id or name.
#[tracing::instrument]
pub fn show(query: &str, json: bool) -> Result<()> {
    let service = query
        .trim()
        .parse::<i32>()
        .ok()
        .and_then(Service::from_id)
        .or_else(|| Service::from_name(query.trim()))
        .ok_or_else(|| anyhow!("Unknown service '{}'", query))?;

    let entry = ServiceEntry {
        id: service.id(),
        name: service.name(),
    };
    if json {
        return ui::json(&entry);
    }

    ui::key_value("Id", &entry.id.to_string());
    ui::key_value("Name", entry.name);
    Ok(())
}
