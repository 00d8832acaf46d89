use super::types::Indicators;

/// Return the catalog entries with at least one indicator present in
/// `source`, compared case-insensitively, in catalog order.
///
/// Blank indicators never match.
pub fn detect<'a, E: Indicators>(source: &str, catalog: &'a [E]) -> Vec<&'a E> {
    if source.is_empty() {
        return Vec::new();
    }
    let normalized = source.to_lowercase();

    catalog.iter()
        .filter(|entry| entry.indicators().iter().any(|i| indicator_present(&normalized, i)))
        .collect()
}

/// `normalized_source` must already be lowercased.
fn indicator_present(normalized_source: &str, indicator: &str) -> bool {
    if indicator.trim().is_empty() {
        return false;
    }
    normalized_source.contains(&indicator.to_lowercase())
}
