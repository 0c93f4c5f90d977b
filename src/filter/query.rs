use super::types::CardFilter;

/// Query keys that drive pagination and never become filters
pub const CARD_PAGINATION_KEYS: [&str; 2] = ["pageNumber", "pageSize"];

/// Turn raw query-string pairs into card filters.
///
/// A value containing commas is split and every trimmed, non-empty part becomes
/// its own filter under the same key. A value without commas is kept verbatim,
/// so `?Sale=` yields an existence-only filter.
pub fn filters_from_query(pairs: &[(String, String)]) -> Vec<CardFilter> {
    let mut filters = Vec::with_capacity(pairs.len());

    for (key, value) in pairs {
        if CARD_PAGINATION_KEYS.contains(&key.as_str()) {
            continue;
        }

        if value.contains(',') {
            filters.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(|part| CardFilter::new(key.clone(), part)),
            );
        } else {
            filters.push(CardFilter::new(key.clone(), value.clone()));
        }
    }

    filters
}
