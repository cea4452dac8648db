//! Tests for title, sort key, metadata and content checks.

use countries::{
    CountryLocale, CountryRecord, CountryRegistry, CountryTable, Selection, SelectionSet, decode,
    has_content, metadata, resolve_codes, sort_key, sort_key_for_locale, title,
};

fn registry() -> CountryRegistry {
    let table = CountryTable::parse(
        r#"
[US]
Name=United States
[FR]
Name=France
[TR]
Name=IRAK
"#,
    )
    .unwrap();
    CountryRegistry::build(&table, &CountryLocale::new())
}

#[test]
fn title_joins_names_in_selection_order() {
    let selection = Selection::Set(resolve_codes(&registry(), ["US", "FR"]));
    assert_eq!(title(&selection), "United States,France");
}

#[test]
fn metadata_matches_title() {
    let registry = registry();
    for stored in ["", "FR", "US,FR", "FR,YU", "Elbonia"] {
        let selection = decode(&registry, stored);
        assert_eq!(metadata(&selection), title(&selection), "stored {stored:?}");
    }
}

#[test]
fn sort_key_is_normalized_title() {
    let selection = Selection::Set(resolve_codes(&registry(), ["FR", "US"]));
    assert_eq!(sort_key(&selection, str::to_lowercase), "france,united states");
    assert_eq!(sort_key(&selection, |s| s.to_string()), title(&selection));
}

#[test]
fn sort_key_uses_locale_case_rules() {
    let selection = Selection::Set(resolve_codes(&registry(), ["TR"]));

    assert_eq!(sort_key_for_locale(&selection, &CountryLocale::new()), "irak");
    assert_eq!(
        sort_key_for_locale(&selection, &CountryLocale::with_language("tr")),
        "ırak"
    );
}

#[test]
fn empty_selection_projects_to_empty_strings() {
    let selection = Selection::default();
    assert_eq!(title(&selection), "");
    assert_eq!(metadata(&selection), "");
    assert_eq!(sort_key_for_locale(&selection, &CountryLocale::new()), "");
}

#[test]
fn unresolved_entries_contribute_empty_names() {
    let selection = decode(&registry(), "FR,YU,US");
    assert_eq!(title(&selection), "France,,United States");
}

#[test]
fn leading_unresolved_entry_leaves_empty_slot() {
    let selection = decode(&registry(), "ZZ,FR");
    assert_eq!(title(&selection), ",France");
    assert_eq!(metadata(&selection), ",France");
}

#[test]
fn legacy_value_passes_through() {
    let selection = Selection::from_simple_string("Elbonia");
    assert_eq!(title(&selection), "Elbonia");
    assert_eq!(metadata(&selection), "Elbonia");
    assert_eq!(
        sort_key_for_locale(&selection, &CountryLocale::new()),
        "elbonia"
    );
}

// =========================================================================
// Content Checks
// =========================================================================

#[test]
fn has_content_for_non_empty_selection() {
    let set: SelectionSet = [CountryRecord::new("FR", "France")].into_iter().collect();
    assert!(has_content(&Selection::Set(set)));
}

#[test]
fn unresolved_only_selection_has_content() {
    let mut set = SelectionSet::new();
    set.insert_unresolved("YU");
    assert!(has_content(&Selection::Set(set)));
}

#[test]
fn empty_selection_has_no_content() {
    assert!(!has_content(&Selection::default()));
    assert!(!has_content(&decode(&registry(), "")));
}

#[test]
fn blank_legacy_value_has_no_content() {
    assert!(!has_content(&Selection::from_simple_string("   ")));
    assert!(!has_content(&Selection::from_simple_string("")));
    assert!(has_content(&Selection::from_simple_string("Elbonia")));
}
