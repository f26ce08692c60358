//! Open an INI file, edit it and save it back, with tracing output.
//!
//! Run with: RUST_LOG=strict_ini=debug cargo run --example edit_file

use std::error::Error;
use std::fs;
use strict_ini::IniFile;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::temp_dir().join("strict_ini_demo.ini");
    fs::write(&path, "[window]\nwidth = 800\nheight = 600\ntitle = 'Demo' # shown in title bar\n")?;

    let mut file = IniFile::open(&path)?;
    {
        let window = file.document_mut().section_mut("window")?;
        let width: u32 = window.get("width")?;
        window.item_mut("width")?.set(width * 2)?;
        window.item_mut("title")?.set("Demo (wide)")?;
        if !window.has_item("fullscreen") {
            window.add_item("fullscreen", 0)?;
        }
    }
    file.save()?;

    println!("{}", fs::read_to_string(&path)?);
    fs::remove_file(&path)?;
    Ok(())
}
