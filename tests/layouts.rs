// tests/layouts.rs
use std::fs;
use std::path::PathBuf;

use serde_json::{Value, json};

use routine_scrape::config::options::Variant;
use routine_scrape::parse_html;

fn fixture(name: &str) -> String {
    let p = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(&p).unwrap_or_else(|e| panic!("read {}: {e}", p.display()))
}

fn parse_fixture(variant: Variant) -> Value {
    let doc = fixture(&format!("{}.html", variant.stem()));
    let records = parse_html(variant.spec(), &doc).unwrap();
    serde_json::to_value(&records).unwrap()
}

#[test]
fn ba_english_flat_records() {
    let v = parse_fixture(Variant::BaEnglish);
    assert_eq!(
        v,
        json!([
            {"day": "1", "slot": "Morning (Time 1)", "time_interval": "09:00 am - 11:00 am", "course_code": "ENG 101", "course_name": "Composition"},
            {"day": "1", "slot": "Noon (Time 2)", "time_interval": "11:30 am - 01:30 pm", "course_code": "ENG 203", "course_name": "Poetry"},
            {"day": "1", "slot": "Afternoon (Time 3)", "time_interval": "02:00 pm - 04:00 pm", "course_code": "ENG 305", "course_name": "Drama"},
            {"day": "1", "slot": "Morning (Time 1)", "time_interval": "09:00 am - 11:00 am", "course_code": "ENG 105", "course_name": "Grammar and Usage"},
            {"day": "2", "slot": "Morning (Time 1)", "time_interval": "09:00 am - 11:00 am", "course_code": "ENG 207", "course_name": "Linguistics"},
            {"day": "2", "slot": "Noon (Time 2)", "time_interval": "11:30 am - 01:30 pm", "course_code": "ENG 301", "course_name": "Shakespeare"},
        ])
    );
}

#[test]
fn ba_english_field_order_is_stable() {
    let doc = fixture("ba_english.html");
    let records = parse_html(Variant::BaEnglish.spec(), &doc).unwrap();
    let text = serde_json::to_string(&records[0]).unwrap();
    assert_eq!(
        text,
        r#"{"day":"1","slot":"Morning (Time 1)","time_interval":"09:00 am - 11:00 am","course_code":"ENG 101","course_name":"Composition"}"#
    );
}

#[test]
fn bba_groups_by_day_and_slot() {
    let v = parse_fixture(Variant::BbaBseco);
    let groups = v.as_array().unwrap();
    assert_eq!(groups.len(), 4);

    assert_eq!(groups[0]["day"], "1");
    assert_eq!(groups[0]["slot"], "Morning (Time 1)");
    assert_eq!(groups[0]["time_interval"], "9:00 AM - 11:00 AM");
    let codes: Vec<&str> = groups[0]["courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["course_code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["BUS 1101", "ACT 2111", "AIS 1201"]);

    assert_eq!(groups[1]["slot"], "Noon (Time 2)");
    assert_eq!(groups[2]["slot"], "Afternoon (Time 3)");
    assert_eq!(groups[2]["courses"][0], json!({"course_code": "MKT 3101", "course_name": "Principles of Marketing"}));
    assert_eq!(groups[3]["day"], "2");
}

#[test]
fn cse_blocks_become_slot_groups() {
    let v = parse_fixture(Variant::Cse);
    assert_eq!(
        v,
        json!([
            {"day": "Day 1", "slot": "T1", "time_interval": "9:00 AM - 11:00 AM", "courses": ["CSE 1111 (Sec A)", "CSE 2213"]},
            {"day": "Day 1", "slot": "T2", "time_interval": "11:30 AM - 01:30 PM", "courses": ["MATH 1151"]},
            {"day": "Day 2", "slot": "T1", "time_interval": "9:00 AM - 11:00 AM", "courses": ["CSE 3411"]},
            {"day": "Day 2", "slot": "T2", "time_interval": "11:30 AM - 01:30 PM", "courses": ["CSE 4451 (Only Final Exam)"]},
            {"day": "Day 2", "slot": "T3", "time_interval": "02:00 PM - 04:00 PM", "courses": ["EEE 2113"]},
        ])
    );
}

#[test]
fn eee_wide_grid_is_flattened_per_trimester() {
    let v = parse_fixture(Variant::Eee);
    let got: Vec<(&str, &str, &str, &str)> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["trimester"].as_str().unwrap(),
                r["day"].as_str().unwrap(),
                r["slot"].as_str().unwrap(),
                r["course"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        got,
        vec![
            ("1", "Day 1", "Time 1", "EEE 1001"),
            ("1", "Day 1", "Time 2", "MAT 101"),
            ("1", "Day 2", "Time 1", "PHY 103"),
            ("2", "Day 1", "Time 3", "EEE 2101"),
            ("2", "Day 3", "Time 1", "EEE 2103 (Only Final Exam)"),
            ("3", "Day 7", "Time 3", "EEE 3901"),
        ]
    );
    assert_eq!(v[5]["time_interval"], "02:00 PM - 04:00 PM");
}

#[test]
fn every_layout_parses_twice_the_same() {
    for variant in Variant::ALL {
        let doc = fixture(&format!("{}.html", variant.stem()));
        let a = parse_html(variant.spec(), &doc).unwrap();
        let b = parse_html(variant.spec(), &doc).unwrap();
        assert_eq!(a, b, "{}", variant.spec().name);
        assert!(!a.is_empty());
    }
}

#[test]
fn absurd_colspan_in_the_day_header_still_parses() {
    let doc = fixture("eee.html").replacen(r#"colspan="3""#, r#"colspan="18446744073709551615""#, 1);
    let records = parse_html(Variant::Eee.spec(), &doc).unwrap();
    assert_eq!(records.len(), 6);
    // Day 1 swallows every column once its span is clamped.
    assert!(records.iter().all(|r| r.key().day == "Day 1"));
}
