//! Static company reference data and sidebar filtering.

use crate::{Company, Symbol};

const FALLBACK: [(&str, &str); 15] = [
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com Inc."),
    ("META", "Meta Platforms Inc."),
    ("TSLA", "Tesla Inc."),
    ("JPM", "JPMorgan Chase & Co."),
    ("JNJ", "Johnson & Johnson"),
    ("V", "Visa Inc."),
    ("WMT", "Walmart Inc."),
    ("PG", "Procter & Gamble"),
    ("MA", "Mastercard Inc."),
    ("DIS", "Walt Disney Co."),
    ("NVDA", "NVIDIA Corporation"),
    ("HD", "Home Depot Inc."),
];

/// The hardcoded 15-company list used when no company endpoint is reachable.
pub fn fallback_companies() -> Vec<Company> {
    FALLBACK
        .iter()
        .map(|(symbol, name)| {
            let symbol = Symbol::parse(symbol).expect("fallback symbols are valid");
            Company::new(symbol, *name)
        })
        .collect()
}

/// Case-insensitive substring match against company name or symbol.
/// An empty filter returns the full list.
pub fn filter_companies(companies: &[Company], filter: &str) -> Vec<Company> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return companies.to_vec();
    }

    companies
        .iter()
        .filter(|company| {
            company.name.to_lowercase().contains(&needle)
                || company.symbol.as_str().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
