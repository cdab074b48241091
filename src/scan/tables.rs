//! Static reference tables shared by the link and network scorers.
//!
//! Tables are built once per process and never mutated. Ordered slices are
//! used where "first match" semantics depend on list order; hash sets are
//! used where only membership matters.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Top-level domain suffixes that are cheap to register and heavily abused.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".xyz",
    ".top",
    ".tk",
    ".ml",
    ".ga",
    ".cf",
    ".gq",
    ".buzz",
    ".click",
    ".link",
    ".work",
    ".loan",
    ".zip",
    ".mov",
    ".country",
    ".stream",
    ".download",
    ".racing",
    ".win",
    ".bid",
    ".icu",
    ".cam",
    ".rest",
    ".monster",
];

/// Words that phishing pages put in hostnames and paths to look legitimate.
pub const PHISHING_KEYWORDS: &[&str] = &[
    "login",
    "signin",
    "sign-in",
    "verify",
    "verification",
    "account",
    "update",
    "secure",
    "banking",
    "confirm",
    "password",
    "suspended",
    "unlock",
    "wallet",
    "billing",
    "invoice",
    "urgent",
    "webscr",
    "credential",
];

/// Brands commonly impersonated by phishing links and rogue hotspots.
///
/// Order matters: the first [`WIFI_BRAND_COUNT`] entries are the brands that
/// commonly run public hotspots and are the only ones the network scorer
/// treats as a standalone impersonation signal.
pub const IMPERSONATION_TARGETS: &[&str] = &[
    "starbucks",
    "mcdonalds",
    "xfinity",
    "attwifi",
    "google",
    "apple",
    "amazon",
    "microsoft",
    "paypal",
    "netflix",
    "facebook",
    "boingo",
    "instagram",
    "chase",
    "wellsfargo",
    "bankofamerica",
    "citibank",
    "coinbase",
    "binance",
    "dropbox",
    "linkedin",
    "outlook",
    "office365",
    "icloud",
    "steam",
    "whatsapp",
    "spotify",
    "ebay",
    "walmart",
    "usps",
    "fedex",
    "dhl",
];

/// Number of leading [`IMPERSONATION_TARGETS`] checked against network names.
pub const WIFI_BRAND_COUNT: usize = 12;

/// Registrable domains that are trusted outright when not deeply nested.
pub static KNOWN_SAFE_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "google.com",
        "youtube.com",
        "gmail.com",
        "facebook.com",
        "instagram.com",
        "whatsapp.com",
        "apple.com",
        "icloud.com",
        "microsoft.com",
        "live.com",
        "office.com",
        "outlook.com",
        "bing.com",
        "amazon.com",
        "paypal.com",
        "netflix.com",
        "spotify.com",
        "linkedin.com",
        "twitter.com",
        "x.com",
        "reddit.com",
        "yahoo.com",
        "github.com",
        "wikipedia.org",
        "dropbox.com",
        "chase.com",
        "wellsfargo.com",
        "bankofamerica.com",
        "coinbase.com",
        "ebay.com",
        "walmart.com",
        "usps.com",
        "fedex.com",
        "dhl.com",
        "starbucks.com",
    ]
    .into_iter()
    .collect()
});

/// Fragments of generic public network names that rogue hotspots imitate.
///
/// Venue-specific fragments come before the generic ones so the reported
/// match is the most descriptive one.
pub const SUSPICIOUS_WIFI_PATTERNS: &[&str] = &[
    "airport",
    "airline",
    "hotel",
    "lounge",
    "terminal",
    "cafe",
    "coffee",
    "library",
    "conference",
    "guest",
    "public",
    "hotspot",
    "freewifi",
    "free",
];

/// Factory-default router names (already normalized).
pub static DEFAULT_ROUTER_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "netgear",
        "linksys",
        "dlink",
        "tplink",
        "asus",
        "belkin",
        "default",
        "wireless",
        "router",
        "setup",
        "homewifi",
        "wifi",
    ]
    .into_iter()
    .collect()
});

/// Bare dotted-quad IPv4 host.
pub static RE_DOTTED_QUAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(?:\.\d{1,3}){3}$").expect("valid dotted quad regex"));

/// Letter/digit adjacency, as in `g00gle` or `paypa1`.
pub static RE_CHAR_SUBSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[a-z][0-9]|[0-9][a-z]").expect("valid character substitution regex")
});

/// Whether `domain` is a known-safe registrable domain.
pub fn is_known_safe(domain: &str) -> bool {
    KNOWN_SAFE_DOMAINS.contains(domain)
}

/// Brands checked against network names.
pub fn wifi_brands() -> &'static [&'static str] {
    &IMPERSONATION_TARGETS[..WIFI_BRAND_COUNT.min(IMPERSONATION_TARGETS.len())]
}
