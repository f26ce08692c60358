use strict_ini::{ini, ErrorKind, Ini};

#[test]
fn test_ini_macro_empty() {
    let doc = ini!().unwrap();
    assert_eq!(doc, Ini::new());
}

#[test]
fn test_ini_macro_empty_sections() {
    let doc = ini! { "a" => {}, "b" => {} }.unwrap();
    assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(doc.section("a").unwrap().is_empty());
}

#[test]
fn test_ini_macro_values() {
    let doc = ini! {
        "server" => {
            "host" => "localhost",
            "port" => 8080u16,
            "ratio" => 0.5,
        }
    }
    .unwrap();

    let server = doc.section("server").unwrap();
    assert_eq!(server.item("host").unwrap().raw_value(), "\"localhost\"");
    assert_eq!(server.get::<u16>("port").unwrap(), 8080);
    assert_eq!(server.get::<f64>("ratio").unwrap(), 0.5);
    assert_eq!(server.keys().collect::<Vec<_>>(), vec!["host", "port", "ratio"]);
}

#[test]
fn test_ini_macro_expression_values() {
    let workers = 4u32;
    let name = String::from("primary");
    let doc = ini! { "pool" => { "workers" => workers * 2, "name" => &name } }.unwrap();
    assert_eq!(doc.get::<u32>("pool", "workers").unwrap(), 8);
    assert_eq!(doc.get::<String>("pool", "name").unwrap(), "primary");
}

#[test]
fn test_ini_macro_matches_parsed_document() {
    let built = ini! {
        "a" => { "x" => 1, "y" => "two" },
        "b" => { "z" => 3.25 },
    }
    .unwrap();
    let parsed = strict_ini::from_str("[a]\nx=1\ny=\"two\"\n\n[b]\nz=3.25").unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_ini_macro_errors() {
    assert_eq!(
        ini! { "a1" => {} }.unwrap_err().kind(),
        ErrorKind::Section
    );
    assert_eq!(
        ini! { "a" => {}, "a" => {} }.unwrap_err().kind(),
        ErrorKind::Section
    );
    assert_eq!(
        ini! { "a" => { "k" => 1, "k" => 2 } }.unwrap_err().kind(),
        ErrorKind::Key
    );
    assert_eq!(
        ini! { "a" => { "k" => -1 } }.unwrap_err().kind(),
        ErrorKind::Value
    );
}
