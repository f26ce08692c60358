//! Property-based tests for the round-trip and charset guarantees.
//!
//! Documents are generated from valid building blocks (alphabetic names,
//! quoted strings, numeric tokens, optional comments), written out, parsed
//! back and compared item by item.

use proptest::prelude::*;
use strict_ini::{from_str, to_string, ErrorKind, Ini};

fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,8}"
}

fn raw_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}",
        "[0-9]{1,4}\\.[0-9]{0,4}",
        "[a-z #;.]{0,10}".prop_map(|s| format!("\"{}\"", s)),
        "[a-z \"#;]{0,10}".prop_map(|s| format!("'{}'", s)),
    ]
}

fn comment() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[#;][a-z #;]{0,10}")
}

type Entry = (String, String, Option<String>);

fn section_body() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec((name(), raw_value(), comment()), 0..6)
}

/// Renders generated sections with irregular padding, dropping repeated names.
fn render(sections: &[(String, Option<String>, Vec<Entry>)]) -> String {
    let mut seen_sections = Vec::new();
    let mut out = String::new();
    for (section, header_comment, items) in sections {
        if seen_sections.contains(section) {
            continue;
        }
        seen_sections.push(section.clone());
        out.push('[');
        out.push_str(section);
        out.push(']');
        if let Some(c) = header_comment {
            out.push_str("   ");
            out.push_str(c);
        }
        out.push('\n');

        let mut seen_keys = Vec::new();
        for (key, value, comment) in items {
            if seen_keys.contains(key) {
                continue;
            }
            seen_keys.push(key.clone());
            out.push_str(&format!("  {} =  {}", key, value));
            if let Some(c) = comment {
                out.push(' ');
                out.push_str(c);
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn triples(ini: &Ini) -> Vec<(String, Vec<(String, String, Option<String>)>)> {
    ini.iter()
        .map(|section| {
            (
                section.name().to_string(),
                section
                    .iter()
                    .map(|item| {
                        (
                            item.key().to_string(),
                            item.raw_value().to_string(),
                            item.comment().map(str::to_string),
                        )
                    })
                    .collect(),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_generated_documents_parse(
        sections in prop::collection::vec((name(), comment(), section_body()), 0..5)
    ) {
        let text = render(&sections);
        prop_assert!(from_str(&text).is_ok(), "failed to parse:\n{}", text);
    }

    #[test]
    fn prop_round_trip(
        sections in prop::collection::vec((name(), comment(), section_body()), 0..5)
    ) {
        let first = from_str(&render(&sections)).unwrap();
        let written = to_string(&first);
        let second = from_str(&written).unwrap();

        prop_assert_eq!(triples(&first), triples(&second));
        prop_assert_eq!(to_string(&second), written);
    }

    #[test]
    fn prop_non_alphabetic_keys_rejected(
        prefix in "[a-z]{0,3}",
        bad in "[0-9_\\-.]",
        suffix in "[a-z]{0,3}",
    ) {
        let text = format!("[s]\n{}{}{} = 1", prefix, bad, suffix);
        let err = from_str(&text).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Key);
    }

    #[test]
    fn prop_non_alphabetic_sections_rejected(
        prefix in "[a-z]{0,3}",
        bad in "[0-9_\\-.]",
        suffix in "[a-z]{0,3}",
    ) {
        let text = format!("[{}{}{}]", prefix, bad, suffix);
        prop_assert_eq!(from_str(&text).unwrap_err().kind(), ErrorKind::Section);
    }

    #[test]
    fn prop_duplicate_key_rejected(key in name(), a in "[0-9]{1,4}", b in "[0-9]{1,4}") {
        let mut ini = Ini::new();
        let section = ini.add_section("s").unwrap();
        section.add_item(key.as_str(), a.parse::<u32>().unwrap()).unwrap();
        let before = section.clone();

        let err = section.add_item(key.as_str(), b.parse::<u32>().unwrap()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Key);
        prop_assert_eq!(&*section, &before);
    }

    #[test]
    fn prop_api_edits_always_reparse(
        text in "[ -~]{0,12}",
        item_comment in "[#;][ -~]{0,12}",
        header_comment in "[#;][ -~]{0,12}",
    ) {
        let mut ini = Ini::new();
        let section = ini.add_section("s").unwrap();
        section.add_item("n", 1).unwrap();
        let _ = section.add_item("v", text.as_str());
        let _ = section.set_comment(Some(header_comment.as_str()));

        let item = section.item_mut("n").unwrap();
        let _ = item.set(text.as_str());
        let _ = item.set_comment(Some(item_comment.as_str()));

        let written = to_string(&ini);
        let reparsed = from_str(&written);
        prop_assert!(reparsed.is_ok(), "failed to re-parse:\n{}", written);
        prop_assert_eq!(reparsed.unwrap(), ini);
    }

    #[test]
    fn prop_integers_read_back(n in any::<u64>()) {
        let ini = from_str(&format!("[s]\nn = {}", n)).unwrap();
        prop_assert_eq!(ini.get::<u64>("s", "n").unwrap(), n);
    }
}
