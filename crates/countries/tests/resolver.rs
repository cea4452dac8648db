//! Tests for resolving submitted input to selections.

use countries::{
    CountryLocale, CountryRegistry, CountryTable, RawInput, resolve_codes, resolve_input,
    resolve_name,
};

fn registry() -> CountryRegistry {
    let table = CountryTable::parse(
        r#"
[US]
Name=United States
[FR]
Name=France
[DE]
Name=Germany
"#,
    )
    .unwrap();
    CountryRegistry::build(&table, &CountryLocale::new())
}

fn codes(selection: &countries::SelectionSet) -> Vec<&str> {
    selection.codes().collect()
}

// =========================================================================
// Codes
// =========================================================================

#[test]
fn unknown_and_blank_tokens_are_dropped() {
    let selection = resolve_codes(&registry(), ["US", "", "ZZ", "fr"]);
    assert_eq!(codes(&selection), ["US", "FR"]);
    assert_eq!(selection.unresolved().count(), 0);
}

#[test]
fn input_order_is_kept() {
    let selection = resolve_codes(&registry(), ["DE", "US", "FR"]);
    assert_eq!(codes(&selection), ["DE", "US", "FR"]);
}

#[test]
fn duplicate_tokens_collapse() {
    let selection = resolve_codes(&registry(), ["FR", "US", "fr", "FR"]);
    assert_eq!(codes(&selection), ["FR", "US"]);
}

#[test]
fn tokens_are_trimmed() {
    let selection = resolve_codes(&registry(), [" de ", "\tUS", "   "]);
    assert_eq!(codes(&selection), ["DE", "US"]);
}

#[test]
fn resolved_entries_carry_records() {
    let selection = resolve_codes(&registry(), ["fr"]);
    assert_eq!(selection.get("FR").unwrap().name(), "France");
    assert!(selection.get("fr").is_none());
}

#[test]
fn nothing_resolves_to_empty_selection() {
    let selection = resolve_codes(&registry(), ["", "XX", "Elbonia"]);
    assert!(selection.is_empty());

    let empty: [&str; 0] = [];
    assert!(resolve_codes(&registry(), empty).is_empty());
}

#[test]
fn owned_token_lists() {
    let tokens = vec!["US".to_string(), "DE".to_string()];
    let selection = resolve_codes(&registry(), &tokens);
    assert_eq!(codes(&selection), ["US", "DE"]);
}

// =========================================================================
// Free Text
// =========================================================================

#[test]
fn exact_name_resolves() {
    let selection = resolve_name(&registry(), "France");
    assert_eq!(codes(&selection), ["FR"]);
}

#[test]
fn partial_or_case_different_names_do_not_resolve() {
    assert!(resolve_name(&registry(), "france").is_empty());
    assert!(resolve_name(&registry(), "Fran").is_empty());
    assert!(resolve_name(&registry(), "United").is_empty());
    assert!(resolve_name(&registry(), "").is_empty());
}

#[test]
fn translated_names_resolve() {
    let table = CountryTable::parse("[DE]\nName=Germany\n").unwrap();
    let mut locale = CountryLocale::with_language("de");
    locale.insert_translation("DE", "Deutschland");
    let registry = CountryRegistry::build(&table, &locale);

    assert_eq!(codes(&resolve_name(&registry, "Deutschland")), ["DE"]);
    assert!(resolve_name(&registry, "Germany").is_empty());
}

// =========================================================================
// Raw Input Dispatch
// =========================================================================

#[test]
fn raw_input_dispatch() {
    let registry = registry();
    let list = RawInput::Codes(vec!["de".to_string(), "US".to_string()]);
    assert_eq!(codes(&resolve_input(&registry, &list)), ["DE", "US"]);

    let name = RawInput::Name("Germany".to_string());
    assert_eq!(codes(&resolve_input(&registry, &name)), ["DE"]);
}
