//! Reference conversions: exact expected text for representative inputs.

use serde::Serialize;
use serde_dsv::{convert, dsv, to_string, to_string_with_options, DsvOptions, ErrorCode, Value};

fn csv(records: &Value) -> String {
    convert(records, &DsvOptions::default()).unwrap()
}

fn error_code(records: &Value, options: &DsvOptions) -> ErrorCode {
    convert(records, options).unwrap_err().code()
}

#[test]
fn test_simple_records() {
    let records = dsv!([
        { "name": "John", "age": 30, "city": "New York" },
        { "name": "Jane", "age": 25, "city": "Los Angeles" }
    ]);
    assert_eq!(
        csv(&records),
        "name,age,city\nJohn,30,New York\nJane,25,Los Angeles"
    );
}

#[test]
fn test_custom_delimiter() {
    let records = dsv!([{ "name": "John", "age": 30 }]);
    let options = DsvOptions::new().with_delimiter(";");
    assert_eq!(convert(&records, &options).unwrap(), "name;age\nJohn;30");
}

#[test]
fn test_custom_delimiter_escaping() {
    let records = dsv!([{ "name": "John;Smith", "age": 30 }]);
    let options = DsvOptions::new().with_delimiter(";");
    assert_eq!(
        convert(&records, &options).unwrap(),
        "name;age\n\"John;Smith\";30"
    );
}

#[test]
fn test_double_quotes_are_doubled() {
    let records = dsv!([{ "name": "John \"Johnny\" Doe", "quote": "He said \"Hello\"" }]);
    assert_eq!(
        csv(&records),
        "name,quote\n\"John \"\"Johnny\"\" Doe\",\"He said \"\"Hello\"\"\""
    );
}

#[test]
fn test_delimiter_in_field() {
    let records = dsv!([{ "name": "John, Jr.", "title": "Senior Developer" }]);
    assert_eq!(csv(&records), "name,title\n\"John, Jr.\",Senior Developer");
}

#[test]
fn test_newline_in_field() {
    let records = dsv!([{ "name": "John", "description": "Line 1\nLine 2" }]);
    assert_eq!(csv(&records), "name,description\nJohn,\"Line 1\nLine 2\"");
}

#[test]
fn test_null_and_absent_values() {
    #[derive(Serialize)]
    struct Person {
        name: Option<&'static str>,
        age: Option<u32>,
        city: Option<&'static str>,
    }

    let people = [
        Person {
            name: Some("John"),
            age: None,
            city: None,
        },
        Person {
            name: None,
            age: Some(25),
            city: Some("LA"),
        },
    ];

    let text = to_string(&people).unwrap();
    let lines: Vec<_> = text.split('\n').collect();
    assert_eq!(lines[1], "John,,");
    assert_eq!(lines[2], ",25,LA");
}

#[test]
fn test_booleans_and_numbers() {
    let records = dsv!([{ "name": "John", "active": true, "verified": false }]);
    assert_eq!(csv(&records), "name,active,verified\nJohn,true,false");

    let records = dsv!([{ "id": 1, "price": 19.99, "count": 0 }]);
    assert_eq!(csv(&records), "id,price,count\n1,19.99,0");
}

#[test]
fn test_float_text_is_the_same_in_fields_and_nested_json() {
    #[derive(Serialize)]
    struct Meta {
        price: f64,
        neg: f64,
    }

    #[derive(Serialize)]
    struct Row {
        price: f64,
        meta: Meta,
    }

    let rows = [Row {
        price: 30.0,
        meta: Meta {
            price: 30.0,
            neg: -0.0,
        },
    }];
    assert_eq!(
        to_string(&rows).unwrap(),
        "price,meta\n30,\"{\"\"price\"\":30,\"\"neg\"\":0}\""
    );

    #[derive(Serialize)]
    struct Extremes {
        big: f64,
        small: f64,
        nested: Vec<f64>,
    }

    let rows = [Extremes {
        big: 1e21,
        small: 1e-7,
        nested: vec![1e21, 30.0, -0.0],
    }];
    assert_eq!(
        to_string(&rows).unwrap(),
        "big,small,nested\n1e+21,1e-7,\"[1e+21,30,0]\""
    );
}

#[test]
fn test_nested_object_as_json() {
    let records = dsv!([{
        "name": "John",
        "metadata": { "role": "admin", "permissions": ["read", "write"] }
    }]);

    let text = csv(&records);
    let lines: Vec<_> = text.split('\n').collect();
    assert_eq!(lines[0], "name,metadata");
    assert_eq!(
        lines[1],
        "John,\"{\"\"role\"\":\"\"admin\"\",\"\"permissions\"\":[\"\"read\"\",\"\"write\"\"]}\""
    );
}

#[test]
fn test_error_codes() {
    let defaults = DsvOptions::default();

    assert_eq!(error_code(&dsv!([]), &defaults), ErrorCode::EmptyInput);
    assert_eq!(
        error_code(&dsv!("not an array"), &defaults),
        ErrorCode::InvalidInput
    );
    assert_eq!(error_code(&dsv!([{}]), &defaults), ErrorCode::NoProperties);
    assert_eq!(
        error_code(&dsv!([{ "a": 1 }]), &DsvOptions::new().with_delimiter("")),
        ErrorCode::InvalidDelimiter
    );

    for invalid in [dsv!([null]), dsv!(["string"]), dsv!([123])] {
        assert_eq!(error_code(&invalid, &defaults), ErrorCode::InvalidDataType);
    }
}

#[test]
fn test_error_messages() {
    let err = to_string(&Vec::<Value>::new()).unwrap_err();
    assert_eq!(err.to_string(), "Input data cannot be empty");

    let err = to_string(&"invalid").unwrap_err();
    assert_eq!(err.code().as_str(), "INVALID_INPUT");
    assert_eq!(err.to_string(), "Input data must be an array (got string)");

    let err = to_string_with_options(&[dsv!({ "name": "John" })], DsvOptions::new().with_delimiter(""))
        .unwrap_err();
    assert_eq!(err.to_string(), "Delimiter must be a non-empty string");
}

#[test]
fn test_large_dataset() {
    #[derive(Serialize)]
    struct User {
        id: usize,
        name: String,
        email: String,
        active: bool,
    }

    let users: Vec<User> = (0..1000)
        .map(|i| User {
            id: i,
            name: format!("User {}", i),
            email: format!("user{}@example.com", i),
            active: i % 2 == 0,
        })
        .collect();

    let text = to_string(&users).unwrap();
    let lines: Vec<_> = text.split('\n').collect();
    assert_eq!(lines.len(), 1001);
    assert_eq!(lines[0], "id,name,email,active");
    assert_eq!(lines[1], "0,User 0,user0@example.com,true");
    assert_eq!(lines[1000], "999,User 999,user999@example.com,false");
}
