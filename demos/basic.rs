//! Converting a list of structs to CSV.
//!
//! Run with: cargo run --example basic

use serde::Serialize;
use serde_dsv::to_string;
use std::error::Error;

#[derive(Serialize)]
struct Person {
    name: String,
    age: u32,
    city: String,
    active: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let people = vec![
        Person {
            name: "John Doe".to_string(),
            age: 30,
            city: "New York".to_string(),
            active: true,
        },
        Person {
            name: "Jane \"JJ\" Smith".to_string(),
            age: 25,
            city: "Los Angeles, CA".to_string(),
            active: false,
        },
    ];

    println!("{}", to_string(&people)?);

    println!("\nError handling:");
    let empty: Vec<Person> = Vec::new();
    if let Err(err) = to_string(&empty) {
        println!("{} (code: {})", err, err.code());
    }

    Ok(())
}
