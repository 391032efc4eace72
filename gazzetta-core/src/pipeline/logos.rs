//! Static source name to logo table used when an article carries no usable image.

/// Icon used when no known source matches.
pub const GENERIC_LOGO: &str = "https://cdn-icons-png.flaticon.com/512/2965/2965879.png";

/// Known publishers, in lookup order.
const SOURCE_LOGOS: &[(&str, &str)] = &[
    (
        "Yahoo Finance",
        "https://s.yimg.com/cv/apiv2/social/images/yahoo_default_logo.png",
    ),
    ("CNBC", "https://www.cnbc.com/favicon.ico"),
    (
        "Bloomberg",
        "https://assets.bwbx.io/s3/javelin/public/javelin/images/bloomberg-logo-black-f11ef4d4c2.svg",
    ),
    (
        "Reuters",
        "https://www.reuters.com/pf/resources/images/reuters/logo-vertical-default.svg?d=116",
    ),
    (
        "Financial Times",
        "https://www.ft.com/__origami/service/image/v2/images/raw/ftlogo-v1:brand-ft-logo-square-coloured?source=origami-build-service",
    ),
    ("Wall Street Journal", "https://www.wsj.com/favicon.ico"),
    ("MarketWatch", "https://www.marketwatch.com/favicon.ico"),
    ("Seeking Alpha", "https://seekingalpha.com/favicon.ico"),
    ("Motley Fool", "https://www.fool.com/favicon.ico"),
    ("Investopedia", "https://www.investopedia.com/favicon.ico"),
    ("Business Insider", "https://www.businessinsider.com/favicon.ico"),
    ("Forbes", "https://www.forbes.com/favicon.ico"),
];

/// Resolve a logo for `source`.
///
/// Exact name match first, then a case-insensitive substring match in either
/// direction (first table entry wins), then [`GENERIC_LOGO`]. An empty source
/// is a substring of every name and therefore resolves to the first entry.
#[must_use]
pub fn logo_for(source: &str) -> &'static str {
    if let Some((_, logo)) = SOURCE_LOGOS.iter().find(|(name, _)| *name == source) {
        return logo;
    }
    let needle = source.to_lowercase();
    SOURCE_LOGOS
        .iter()
        .find(|(name, _)| {
            let name = name.to_lowercase();
            name.contains(&needle) || needle.contains(&name)
        })
        .map_or(GENERIC_LOGO, |(_, logo)| logo)
}
