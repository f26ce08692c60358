//! Build a document with the `ini!` macro and export it as JSON.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use strict_ini::ini;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = ini! {
        "server" => {
            "host" => "localhost",
            "port" => 8080,
        },
        "limits" => {
            "ratio" => 0.25,
            "burst" => 16,
        },
    }?;

    println!("{}\n", doc);
    println!("{}", serde_json::to_string_pretty(&doc)?);

    Ok(())
}
