#![allow(clippy::unwrap_used)]

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_defaults() {
    let s = Settings::parse(&[], None).unwrap();
    assert_eq!(s.start_month, Month::JANUARY);
    assert!(s.log_filter.is_none());
    assert!(s.command.is_empty());
}

#[test]
fn test_month_flag() {
    let s = Settings::parse(&args(&["--month", "3"]), None).unwrap();
    assert_eq!(s.start_month.number(), 3);
    let s = Settings::parse(&args(&["summary", "-m", "12"]), None).unwrap();
    assert_eq!(s.start_month, Month::DECEMBER);
    assert_eq!(s.command, ["summary"]);
}

#[test]
fn test_month_flag_rejects_bad_values() {
    assert!(Settings::parse(&args(&["--month"]), None).is_err());
    assert!(Settings::parse(&args(&["--month", "0"]), None).is_err());
    assert!(Settings::parse(&args(&["--month", "13"]), None).is_err());
    assert!(Settings::parse(&args(&["--month", "maio"]), None).is_err());
}

#[test]
fn test_positional_args_are_kept_in_order() {
    let s = Settings::parse(&args(&["summary", "2"]), None).unwrap();
    assert_eq!(s.command, ["summary", "2"]);
}

#[test]
fn test_blank_log_filter_disables_logging() {
    let s = Settings::parse(&[], Some("  ".into())).unwrap();
    assert!(s.log_filter.is_none());
    let s = Settings::parse(&[], Some("debug".into())).unwrap();
    assert_eq!(s.log_filter.as_deref(), Some("debug"));
}
