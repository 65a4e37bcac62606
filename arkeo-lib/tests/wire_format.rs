//! Wire format compatibility tests.
//!
//! Byte-level checks that messages encode the way the chain's generated code
//! does: default fields are omitted, unknown fields are skipped, and the JSON
//! form follows the gateway's conventions.

use arkeo_lib::proto::arkeo::{
    Contract, ContractAuthorization, ContractType, GenesisState, MsgBondProvider,
    MsgClaimContractIncome, MsgOpenContract, Params, Provider, QueryAllContractResponse,
};
use arkeo_lib::proto::claim::{Chain, ClaimRecord, MsgAddClaim};
use arkeo_lib::proto::{pack_any, unpack_any, Coin, TypeUrl};
use arkeo_lib::registry::MessageRegistry;
use arkeo_lib::{ArkeoError, ValidateBasic};
use prost::Message;
use serde_json::json;

// ============================================================================
// Binary
// ============================================================================

#[test]
fn test_default_messages_encode_empty() {
    assert!(Contract::default().encode_to_vec().is_empty());
    assert!(Provider::default().encode_to_vec().is_empty());
    assert!(Params::default().encode_to_vec().is_empty());
    assert!(GenesisState::default().encode_to_vec().is_empty());
    assert!(ClaimRecord::default().encode_to_vec().is_empty());
    assert!(MsgOpenContract::default().encode_to_vec().is_empty());
}

#[test]
fn test_empty_input_decodes_to_default() {
    assert_eq!(Contract::decode(&[][..]).unwrap(), Contract::default());
    assert_eq!(Provider::decode(&[][..]).unwrap(), Provider::default());
    assert_eq!(ClaimRecord::decode(&[][..]).unwrap(), ClaimRecord::default());
}

#[test]
fn test_bond_provider_bytes() {
    let msg = MsgBondProvider {
        provider: vec![0xAA, 0xBB],
        service: "3".to_string(),
        bond: "1000000".to_string(),
        ..Default::default()
    };
    let bytes = msg.encode_to_vec();

    let expected: Vec<u8> = [
        &[0x12, 0x02, 0xAA, 0xBB][..],
        &[0x1a, 0x01, b'3'][..],
        &[0x22, 0x07][..],
        b"1000000",
    ]
    .concat();
    assert_eq!(bytes, expected);

    let decoded = MsgBondProvider::decode(bytes.as_slice()).unwrap();
    assert_eq!(decoded, msg);
    assert!(decoded.creator.is_empty());
}

#[test]
fn test_unknown_fields_are_skipped() {
    let known = MsgBondProvider {
        service: "btc-mainnet-fullnode".to_string(),
        ..Default::default()
    };
    let mut bytes = known.encode_to_vec();

    // field 50, varint
    bytes.extend_from_slice(&[0x90, 0x03, 0x96, 0x01]);
    // field 51, length delimited
    bytes.extend_from_slice(&[0x9a, 0x03, 0x03, 1, 2, 3]);
    // field 52, fixed32
    bytes.extend_from_slice(&[0xa5, 0x03, 0, 0, 0, 0]);
    // field 53, fixed64
    bytes.extend_from_slice(&[0xa9, 0x03, 0, 0, 0, 0, 0, 0, 0, 0]);

    assert_eq!(MsgBondProvider::decode(bytes.as_slice()).unwrap(), known);
}

#[test]
fn test_truncated_input_is_decode_error() {
    let contract = Contract {
        provider: vec![2; 33],
        id: 9,
        ..Default::default()
    };
    let bytes = contract.encode_to_vec();
    let err: ArkeoError = Contract::decode(&bytes[..bytes.len() - 1]).unwrap_err().into();
    assert!(matches!(err, ArkeoError::Decode(_)));
}

#[test]
fn test_negative_int64_round_trips() {
    let msg = MsgClaimContractIncome {
        nonce: -1,
        signature_expires_at_block: i64::MIN,
        ..Default::default()
    };
    let decoded = MsgClaimContractIncome::decode(msg.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded.nonce, -1);
    assert_eq!(decoded.signature_expires_at_block, i64::MIN);
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_contract_json_conventions() {
    let contract = Contract {
        provider: vec![0xAA, 0xBB],
        r#type: ContractType::PayAsYouGo as i32,
        authorization: ContractAuthorization::Open as i32,
        height: 1_200,
        id: u64::MAX,
        rate: Some(Coin::new("uarkeo", "5")),
        ..Default::default()
    };
    let value = serde_json::to_value(&contract).unwrap();

    assert_eq!(value["provider"], "qrs=");
    assert_eq!(value["type"], "PAY_AS_YOU_GO");
    assert_eq!(value["authorization"], "OPEN");
    assert_eq!(value["height"], "1200");
    assert_eq!(value["id"], "18446744073709551615");
    assert_eq!(value["rate"], json!({"denom": "uarkeo", "amount": "5"}));
    assert_eq!(value["service"], 0);
}

#[test]
fn test_json_accepts_numbers_and_enum_numbers() {
    let contract: Contract = serde_json::from_value(json!({
        "height": 10,
        "duration": "20",
        "type": 1,
        "authorization": "STRICT",
        "id": "3"
    }))
    .unwrap();
    assert_eq!(contract.height, 10);
    assert_eq!(contract.duration, 20);
    assert_eq!(contract.contract_type(), ContractType::PayAsYouGo);
    assert_eq!(contract.id, 3);
}

#[test]
fn test_json_missing_fields_default() {
    let response: QueryAllContractResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.contract.is_empty());
    assert!(response.pagination.is_none());

    let record: ClaimRecord = serde_json::from_value(json!({
        "chain": "ETHEREUM",
        "address": "0x92E14917A0508Eb56C90C90619f5F9Adbf49f47d"
    }))
    .unwrap();
    assert_eq!(record.chain, Chain::Ethereum as i32);
    assert!(record.is_empty());
}

// ============================================================================
// Any and registry
// ============================================================================

#[test]
fn test_any_round_trip_through_registry() {
    let msg = MsgAddClaim {
        creator: vec![1; 20],
        chain: Chain::Ethereum as i32,
        address: "0x92E14917A0508Eb56C90C90619f5F9Adbf49f47d".to_string(),
        amount: 500,
    };
    msg.validate_basic().unwrap();

    let any = pack_any(&msg);
    assert_eq!(any.type_url, MsgAddClaim::type_url());
    assert_eq!(any.type_url, "/arkeo.claim.MsgAddClaim");

    let registry = MessageRegistry::with_defaults();
    let value = registry.decode_any(&any).unwrap();
    assert_eq!(value["chain"], "ETHEREUM");
    assert_eq!(value["amount"], "500");

    let again = registry.encode_any(&any.type_url, &value).unwrap();
    assert_eq!(again, any);
    assert_eq!(unpack_any::<MsgAddClaim>(&again).unwrap(), msg);
}

#[test]
fn test_unpack_wrong_type() {
    let any = pack_any(&MsgAddClaim::default());
    let err = unpack_any::<MsgBondProvider>(&any).unwrap_err();
    assert!(matches!(err, ArkeoError::TypeMismatch { .. }));
}
