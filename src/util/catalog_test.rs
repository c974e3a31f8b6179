use super::*;

#[test]
fn default_district_is_in_the_table() {
    let d = default_district();
    assert!(DISTRICTS.iter().any(|x| x.code == d.code));
    assert_eq!(d.code, "lko");
}

#[test]
fn find_district_resolves_known_codes() {
    assert_eq!(find_district("mum").map(|d| d.name), Some("Mumbai"));
    assert_eq!(find_district("xyz"), None);
}

#[test]
fn district_display_name_falls_back_to_raw_code() {
    assert_eq!(district_display_name("lko"), "Lucknow");
    assert_eq!(district_display_name("zzz"), "zzz");
}

#[test]
fn service_icon_matches_table() {
    assert_eq!(service_icon("Water Supply"), Some("💧"));
    assert_eq!(service_icon("Parking"), None);
}

#[test]
fn filter_districts_is_case_insensitive_substring() {
    let hits = filter_districts("LUCK");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].code, "lko");

    // "a" appears in several names.
    assert!(filter_districts("a").len() > 1);
}

#[test]
fn filter_districts_empty_query_returns_all() {
    assert_eq!(filter_districts("").len(), DISTRICTS.len());
    assert_eq!(filter_districts("   ").len(), DISTRICTS.len());
}
