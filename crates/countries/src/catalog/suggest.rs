//! Typo suggestions for unresolved country names.

use strsim::levenshtein;

use crate::catalog::registry::CountryRegistry;

/// Compute "did you mean" suggestions for a free-text country name.
///
/// Candidates are compared case-insensitively:
/// - Max distance: 1 for names up to 3 characters, 2 otherwise
/// - Limit to 3 suggestions, sorted by distance then registry order
pub fn compute_suggestions(name: &str, registry: &CountryRegistry) -> Vec<String> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let max_distance = if needle.chars().count() <= 3 { 1 } else { 2 };

    let mut suggestions: Vec<(usize, String)> = registry
        .all()
        .iter()
        .filter(|record| record.name() != name)
        .filter_map(|record| {
            let dist = levenshtein(&needle, &record.name().to_lowercase());
            if dist <= max_distance {
                Some((dist, record.name().to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
