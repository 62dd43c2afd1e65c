use chrono::{TimeZone, Utc};
use serde::Serialize;
use serde_dsv::{
    convert, to_string, to_string_with_options, to_value, to_writer_with_options, Delimiter,
    DsvMap, DsvOptions, ErrorCode, LineTerminator, Value,
};
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Active,
    Suspended { reason: String },
}

#[derive(Serialize)]
struct Account {
    id: u32,
    status: Status,
    owner: Option<String>,
}

#[test]
fn test_array_of_structs() {
    let products = vec![
        Product {
            sku: "WIDGET-001".to_string(),
            price: 29.99,
            quantity: 2,
        },
        Product {
            sku: "GADGET-002".to_string(),
            price: 49.5,
            quantity: 1,
        },
    ];

    let csv = to_string(&products).unwrap();
    assert_eq!(csv, "sku,price,quantity\nWIDGET-001,29.99,2\nGADGET-002,49.5,1");
}

#[test]
fn test_enum_fields() {
    let accounts = vec![
        Account {
            id: 1,
            status: Status::Active,
            owner: Some("alice".to_string()),
        },
        Account {
            id: 2,
            status: Status::Suspended {
                reason: "fraud check".to_string(),
            },
            owner: None,
        },
    ];

    let csv = to_string(&accounts).unwrap();
    assert_eq!(
        csv,
        "id,status,owner\n1,active,alice\n2,\"{\"\"suspended\"\":{\"\"reason\"\":\"\"fraud check\"\"}}\","
    );
}

#[test]
fn test_serde_json_values_keep_key_order() {
    let records: serde_json::Value = serde_json::from_str(
        r#"[
            {"zeta": 1, "alpha": {"y": 1, "x": 2}},
            {"mid": "m", "zeta": 2}
        ]"#,
    )
    .unwrap();

    let csv = to_string(&records).unwrap();
    assert_eq!(csv, "zeta,alpha,mid\n1,\"{\"\"y\"\":1,\"\"x\"\":2}\",\n2,,m");
}

#[test]
fn test_value_deserialized_from_json() {
    let records: Value =
        serde_json::from_str(r#"[{"name": "John", "tags": ["a", "b"], "score": null}]"#).unwrap();

    let csv = convert(&records, &DsvOptions::default()).unwrap();
    assert_eq!(csv, "name,tags,score\nJohn,\"[\"\"a\"\",\"\"b\"\"]\",");
}

#[test]
fn test_maps_as_records() {
    let mut first = BTreeMap::new();
    first.insert("b", 2);
    first.insert("a", 1);
    let mut second = BTreeMap::new();
    second.insert("c", 3);

    let csv = to_string(&vec![first, second]).unwrap();
    assert_eq!(csv, "a,b,c\n1,2,\n,,3");
}

#[test]
fn test_tab_separated_with_crlf() {
    let products = vec![Product {
        sku: "A\tB".to_string(),
        price: 1.25,
        quantity: 3,
    }];

    let options = DsvOptions::tsv().with_line_terminator(LineTerminator::CrLf);
    let tsv = to_string_with_options(&products, options).unwrap();
    assert_eq!(tsv, "sku\tprice\tquantity\r\n\"A\tB\"\t1.25\t3");
}

#[test]
fn test_multi_character_delimiter() {
    let mut record = DsvMap::new();
    record.insert("left".to_string(), Value::from("a"));
    record.insert("right".to_string(), Value::from("b|c"));

    let options = DsvOptions::new().with_delimiter(Delimiter::Custom(" || ".to_string()));
    let text = convert(&Value::Array(vec![Value::Object(record)]), &options).unwrap();
    assert_eq!(text, "left || right\na || b|c");
}

#[test]
fn test_dates_and_big_integers() {
    let mut record = DsvMap::new();
    record.insert(
        "created".to_string(),
        Value::from(Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()),
    );
    record.insert("counter".to_string(), Value::from(u128::MAX));
    record.insert(
        "history".to_string(),
        Value::Array(vec![Value::from(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())]),
    );

    let text = convert(&Value::Array(vec![Value::Object(record)]), &DsvOptions::default()).unwrap();
    assert_eq!(
        text,
        "created,counter,history\n2024-02-29T12:00:00.000Z,340282366920938463463374607431768211455,\"[\"\"2023-01-01T00:00:00.000Z\"\"]\""
    );
}

#[test]
fn test_to_writer_with_options() {
    let mut buffer = Vec::new();
    let products = vec![Product {
        sku: "X".to_string(),
        price: 2.0,
        quantity: 0,
    }];

    to_writer_with_options(&mut buffer, &products, DsvOptions::new().with_delimiter('|')).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "sku|price|quantity\nX|2|0");
}

#[test]
fn test_to_value_then_convert_matches_to_string() {
    let products = vec![Product {
        sku: "S".to_string(),
        price: 0.1,
        quantity: 7,
    }];

    let value = to_value(&products).unwrap();
    assert_eq!(
        convert(&value, &DsvOptions::default()).unwrap(),
        to_string(&products).unwrap()
    );
}

#[test]
fn test_sequence_of_scalars_is_invalid_data_type() {
    let err = to_string(&vec![1, 2, 3]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidDataType);
    assert!(err.to_string().contains("item 1 is number"));
}
