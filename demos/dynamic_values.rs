//! Converting records whose shape is only known at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde_dsv::{convert, dsv, DsvOptions, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Records built in code; keys missing from a record give empty fields
    let records = dsv!([
        {
            "id": 1,
            "name": "John \"Johnny\" Doe",
            "metadata": { "role": "admin", "permissions": ["read", "write"] },
            "notes": "Contains, comma\nand newline",
            "score": null
        },
        { "id": 2, "name": "Jane Smith", "email": "jane@example.com" }
    ]);
    println!("{}\n", convert(&records, &DsvOptions::default())?);

    // Records parsed from JSON text keep their key order
    let parsed: Value = serde_json::from_str(
        r#"[{"zeta": 1, "alpha": true}, {"alpha": false, "beta": [1, 2]}]"#,
    )?;
    println!("{}\n", convert(&parsed, &DsvOptions::default())?);

    // Records with no keys at all
    match convert(&dsv!([{}, {}]), &DsvOptions::default()) {
        Ok(text) => println!("{}", text),
        Err(err) => println!("{} (code: {})", err, err.code()),
    }

    Ok(())
}
