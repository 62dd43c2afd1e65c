//! Customizing the output with DsvOptions.
//!
//! Run with: RUST_LOG=serde_dsv=debug cargo run --example custom_options

use serde::Serialize;
use serde_dsv::{to_string_with_options, Delimiter, DsvOptions, LineTerminator};
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct DataRow {
    id: u32,
    value: String,
    active: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rows = vec![
        DataRow {
            id: 1,
            value: "first; with semicolon".to_string(),
            active: true,
        },
        DataRow {
            id: 2,
            value: "second\twith tab".to_string(),
            active: false,
        },
    ];

    println!("Semicolon delimiter:");
    let options = DsvOptions::new().with_delimiter(Delimiter::Semicolon);
    println!("{}\n", to_string_with_options(&rows, options)?);

    println!("Tab delimiter:");
    println!("{}\n", to_string_with_options(&rows, DsvOptions::tsv())?);

    println!("Pipe delimiter, CRLF line endings:");
    let options = DsvOptions::new()
        .with_delimiter('|')
        .with_line_terminator(LineTerminator::CrLf);
    println!("{:?}\n", to_string_with_options(&rows, options)?);

    println!("Options loaded from JSON config:");
    let options: DsvOptions = serde_json::from_str(r#"{"delimiter": {"custom": " :: "}}"#)?;
    println!("{}", to_string_with_options(&rows, options)?);

    Ok(())
}
