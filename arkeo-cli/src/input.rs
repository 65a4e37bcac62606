//! Parsing of command-line arguments into library types

use anyhow::{anyhow, bail, Context, Result};
use arkeo_lib::proto::{Any, PageRequest};
use arkeo_lib::Service;
use base64::Engine;
use serde_json::Value;
use std::io::Read;

const BASE64: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;

/// Parse raw bytes.
///
/// `0x`-prefixed input is hex, `hex:` and `base64:` select the encoding
/// explicitly, anything else is read as standard base64 (the gateway's form).
pub fn parse_bytes(input: &str) -> Result<Vec<u8>> {
    let input = input.trim();

    if let Some(hex_str) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("hex:"))
    {
        return hex::decode(hex_str).context("Invalid hex input");
    }

    let b64 = input.strip_prefix("base64:").unwrap_or(input);
    BASE64.decode(b64).context("Invalid base64 input")
}

/// Normalize a type URL to its `/package.Message` form.
pub fn parse_type_url(input: &str) -> Result<String> {
    let name = input.trim().trim_start_matches('/');
    if name.is_empty() || !name.contains('.') {
        bail!("Invalid type URL '{}' (expected e.g. /arkeo.arkeo.MsgBondProvider)", input);
    }
    Ok(format!("/{}", name))
}

/// Read a JSON argument: inline JSON, `@path` for a file, or `-` for stdin.
pub fn read_json_arg(arg: &str) -> Result<Value> {
    let text = if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else if let Some(path) = arg.strip_prefix('@') {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    } else {
        arg.to_string()
    };

    serde_json::from_str(&text).context("Invalid JSON")
}

/// Build an `Any` from either a type URL plus encoded bytes, or the JSON
/// envelope `encode --json` prints (`{"@type": ..., "value": <base64>}`) when
/// no type URL is given. Canonical Any JSON with inlined fields is not accepted.
pub fn parse_any(type_url: Option<&str>, data: &str) -> Result<Any> {
    match type_url {
        Some(type_url) => Ok(Any {
            type_url: parse_type_url(type_url)?,
            value: parse_bytes(data)?,
        }),
        None => {
            let value = read_json_arg(data)?;
            if let Some(extra) = value
                .as_object()
                .and_then(|fields| fields.keys().find(|k| *k != "@type" && *k != "value"))
            {
                return Err(anyhow!(
                    "Unexpected field '{}': pass --type with the message bytes instead of inlined fields",
                    extra
                ));
            }
            let any: Any = serde_json::from_value(value)
                .context("Expected a JSON Any with '@type' and 'value'")?;
            if any.type_url.is_empty() {
                return Err(anyhow!("JSON Any is missing '@type'"));
            }
            Ok(any)
        }
    }
}

/// Build a page request from list flags; `None` when no flag is set.
pub fn page_request(
    limit: Option<u64>,
    key: Option<&str>,
    offset: Option<u64>,
    reverse: bool,
) -> Result<Option<PageRequest>> {
    if limit.is_none() && key.is_none() && offset.is_none() && !reverse {
        return Ok(None);
    }

    let key = key.map(parse_bytes).transpose()?.unwrap_or_default();
    if !key.is_empty() && offset.is_some() {
        bail!("--key and --offset cannot be combined");
    }

    Ok(Some(PageRequest {
        key,
        offset: offset.unwrap_or(0),
        limit: limit.unwrap_or(0),
        count_total: false,
        reverse,
    }))
}

/// Resolve a service argument to the name used in REST paths.
///
/// Numeric ids are mapped through the service table; names pass through so
/// services newer than the table still work.
pub fn service_name(input: &str) -> Result<String> {
    let input = input.trim();
    if let Ok(id) = input.parse::<i32>() {
        return Service::from_id(id)
            .map(|service| service.name().to_string())
            .ok_or_else(|| anyhow!("Unknown service id {}", id));
    }
    if input.is_empty() {
        bail!("Service must not be empty");
    }
    match Service::from_name(input) {
        Some(service) => Ok(service.name().to_string()),
        None => {
            tracing::warn!("Service '{}' is not in the known service table", input);
            Ok(input.to_string())
        }
    }
}

/// Encode bytes for display.
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}
