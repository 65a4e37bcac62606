//! Codec commands - encode, decode and validate registered message types

use anyhow::{Context, Result};
use arkeo_lib::proto::Any;
use arkeo_lib::registry::global;
use arkeo_lib::MessageRegistry;
use colored::Colorize;

use crate::input;
use crate::ui;

/// Decode an `Any` given as type URL plus bytes, or as a JSON `Any`.
#[tracing::instrument]
pub fn decode(type_url: Option<&str>, data: &str, validate: bool, json: bool) -> Result<()> {
    let registry = global::registry();
    let any = input::parse_any(type_url, data)?;
    let value = registry
        .decode_any(&any)
        .with_context(|| format!("Failed to decode {}", any.type_url))?;

    if json {
        ui::json(&value)?;
    } else {
        ui::header("Decoded Message");
        ui::key_value("Type", &any.type_url);
        ui::key_value("Size", &format!("{} bytes", any.value.len()));
        ui::separator();
        ui::json(&value)?;
    }

    if validate {
        check(registry, &any, json)?;
    }
    Ok(())
}

/// Encode a JSON message as protobuf bytes.
#[tracing::instrument]
pub fn encode(type_url: &str, message: &str, validate: bool, json: bool) -> Result<()> {
    let registry = global::registry();
    let any = encode_message(registry, type_url, message)?;

    if validate {
        check(registry, &any, json)?;
    }

    if json {
        return ui::json(&any);
    }

    ui::header("Encoded Message");
    ui::key_value("Type", &any.type_url);
    ui::key_value("Size", &format!("{} bytes", any.value.len()));
    ui::key_value("Base64", &input::encode_base64(&any.value));
    ui::key_value("Hex", &hex::encode(&any.value));
    Ok(())
}

/// Run stateless validation on a JSON message.
#[tracing::instrument]
pub fn validate(type_url: &str, message: &str, json: bool) -> Result<()> {
    let registry = global::registry();
    let any = encode_message(registry, type_url, message)?;
    check(registry, &any, json)
}

/// List registered type URLs, optionally limited to one package.
#[tracing::instrument]
pub fn types(package: Option<&str>, json: bool) -> Result<()> {
    let registry = global::registry();
    let urls = match package {
        Some(package) => registry.list_package(package.trim_start_matches('/')),
        None => registry.list_type_urls(),
    };

    if json {
        return ui::json(&urls);
    }

    ui::header("Registered Types");
    if urls.is_empty() {
        ui::info("No registered types match");
        return Ok(());
    }
    for url in &urls {
        println!("  {}", url);
    }
    ui::list_footer(urls.len(), "type", None);
    Ok(())
}

/// Parse `message` and encode it as an `Any` of `type_url`.
pub fn encode_message(registry: &MessageRegistry, type_url: &str, message: &str) -> Result<Any> {
    let type_url = input::parse_type_url(type_url)?;
    let value = input::read_json_arg(message)?;
    registry
        .encode_any(&type_url, &value)
        .with_context(|| format!("Failed to encode {}", type_url))
}

fn check(registry: &MessageRegistry, any: &Any, json: bool) -> Result<()> {
    match registry.validate_any(any) {
        Ok(()) => {
            if !json {
                ui::success(&format!("{} passes validation", any.type_url));
            }
            Ok(())
        }
        Err(e) => {
            tracing::debug!("Validation failed: {:?}", e);
            Err(e).with_context(|| format!("{} {}", any.type_url, "fails validation".red()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkeo_lib::proto::arkeo::MsgCloseContract;
    use arkeo_lib::proto::unpack_any;

    #[test]
    fn test_encode_message() {
        let registry = MessageRegistry::with_defaults();
        let any = encode_message(
            &registry,
            "arkeo.arkeo.MsgCloseContract",
            r#"{"creator": "AQID", "contract_id": "42"}"#,
        )
        .unwrap();

        assert_eq!(any.type_url, "/arkeo.arkeo.MsgCloseContract");
        let msg: MsgCloseContract = unpack_any(&any).unwrap();
        assert_eq!(msg.contract_id, 42);
        assert_eq!(msg.creator, vec![1, 2, 3]);
    }

    #[test]
    fn test_encode_unknown_type() {
        let registry = MessageRegistry::with_defaults();
        assert!(encode_message(&registry, "arkeo.arkeo.MsgNope", "{}").is_err());
    }

    #[test]
    fn test_check_reports_invalid_message() {
        let registry = MessageRegistry::with_defaults();
        let any = encode_message(&registry, "/arkeo.arkeo.MsgCloseContract", "{}").unwrap();
        assert!(check(&registry, &any, true).is_err());
    }
}
