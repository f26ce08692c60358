//! Parse an INI document, read typed values and write it back.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use strict_ini::{from_str, to_string};

const CONFIG: &str = "\
[server] # public endpoint
host = \"example.org\"
port = 8080 ; default http

[limits]
ratio = 0.75";

fn main() -> Result<(), Box<dyn Error>> {
    let mut ini = from_str(CONFIG)?;

    let host: String = ini.get("server", "host")?;
    let port: u16 = ini.get("server", "port")?;
    let ratio: f64 = ini.get("limits", "ratio")?;
    println!("host={} port={} ratio={}", host, port, ratio);

    ini.section_mut("server")?.item_mut("port")?.set(port + 1)?;
    ini.add_section("cache")?.add_item("size", 64)?;

    let written = to_string(&ini);
    println!("Written back:\n{}\n", written);

    assert_eq!(from_str(&written)?, ini);
    println!("✓ Round-trip successful");

    match from_str("[server]\nport = 80.80.80") {
        Ok(_) => unreachable!(),
        Err(err) => println!("Rejected as expected: {}", err),
    }

    Ok(())
}
