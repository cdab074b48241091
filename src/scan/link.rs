//! Link risk scoring.

use super::tables::{
    is_known_safe, IMPERSONATION_TARGETS, PHISHING_KEYWORDS, RE_CHAR_SUBSTITUTION,
    RE_DOTTED_QUAD, SUSPICIOUS_TLDS,
};
use super::{Band, Findings, LinkRisk, LinkVerdict};
use url::{Host, Url};

const MALFORMED_SCORE: u8 = 90;
const KNOWN_SAFE_SCORE: u8 = 5;
/// Hostnames deeper than this never take the known-safe shortcut.
const KNOWN_SAFE_MAX_LABELS: usize = 3;
const EXCESSIVE_SUBDOMAIN_LABELS: usize = 4;
const MAX_URL_LEN: usize = 200;
const KEYWORD_POINTS: u32 = 10;
const KEYWORD_CAP: u32 = 25;
const KEYWORDS_REPORTED: usize = 3;

const SUMMARY_HIGH: &str =
    "This link shows strong signs of phishing or malware. Do not open it or enter any information.";
const SUMMARY_MEDIUM: &str =
    "This link has some suspicious characteristics. Only open it if you trust the sender.";
const SUMMARY_LOW: &str =
    "This link looks mostly safe, but stay alert for unexpected requests for personal information.";
const SUMMARY_CLEAN: &str = "No suspicious patterns detected. This link appears safe to open.";

fn summary_for(level: LinkRisk) -> &'static str {
    match level {
        LinkRisk::High => SUMMARY_HIGH,
        LinkRisk::Medium => SUMMARY_MEDIUM,
        LinkRisk::Low => SUMMARY_LOW,
        LinkRisk::Clean => SUMMARY_CLEAN,
    }
}

/// Trim and add an `http://` scheme when none is present.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Last two dot-separated labels of `host`.
pub fn root_domain(host: &str) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    let start = labels.len().saturating_sub(2);
    labels[start..].join(".")
}

/// Score a raw, possibly scheme-less URL.
pub fn score_link(raw_url: &str) -> LinkVerdict {
    let normalized = normalize_url(raw_url);

    let parsed = match Url::parse(&normalized) {
        Ok(u) if u.host_str().is_some_and(|h| !h.is_empty()) => u,
        Ok(_) => return malformed(&normalized, "missing host"),
        Err(e) => return malformed(&normalized, &e.to_string()),
    };

    let host = parsed
        .host_str()
        .unwrap_or_default()
        .trim_end_matches('.')
        .to_ascii_lowercase();
    let labels = host.split('.').count();
    let root = root_domain(&host);

    if is_known_safe(&root) && labels <= KNOWN_SAFE_MAX_LABELS {
        tracing::debug!(host = %host, "link matched known-safe domain");
        let level = LinkRisk::Low;
        return LinkVerdict {
            level,
            score: KNOWN_SAFE_SCORE,
            flags: vec![format!("Recognized domain: {root}")],
            summary: summary_for(level).to_string(),
        };
    }

    let mut findings = Findings::default();

    if let Some(tld) = SUSPICIOUS_TLDS.iter().find(|t| host.ends_with(*t)) {
        findings.add(20, format!("Suspicious top-level domain ({tld})"));
    }

    if labels >= EXCESSIVE_SUBDOMAIN_LABELS {
        findings.add(15, format!("Excessive subdomains ({labels} levels)"));
    }

    if !is_known_safe(&root) {
        if let Some(brand) = IMPERSONATION_TARGETS.iter().find(|b| host.contains(*b)) {
            findings.add(30, format!("Possible impersonation of {brand}"));
        }
    }

    let mut path_query = parsed.path().to_ascii_lowercase();
    if let Some(q) = parsed.query() {
        path_query.push('?');
        path_query.push_str(&q.to_ascii_lowercase());
    }
    let keywords: Vec<&str> = PHISHING_KEYWORDS
        .iter()
        .copied()
        .filter(|k| host.contains(k) || path_query.contains(k))
        .collect();
    if !keywords.is_empty() {
        let points = (keywords.len() as u32 * KEYWORD_POINTS).min(KEYWORD_CAP);
        let shown = keywords
            .iter()
            .take(KEYWORDS_REPORTED)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        findings.add(points, format!("Phishing keywords: {shown}"));
    }

    if RE_DOTTED_QUAD.is_match(&host) {
        findings.add(25, "Raw IP address instead of a domain name");
    }

    if let Some(port) = parsed.port().filter(|p| *p != 80 && *p != 443) {
        findings.add(10, format!("Non-standard port {port}"));
    }

    if parsed.scheme() == "http" {
        findings.add(10, "Unencrypted connection (http)");
    }

    let ip_literal = matches!(parsed.host(), Some(Host::Ipv4(_) | Host::Ipv6(_)));
    let without_tld = host.rsplit_once('.').map_or(host.as_str(), |(name, _)| name);
    if !ip_literal && RE_CHAR_SUBSTITUTION.is_match(without_tld) {
        findings.add(20, "Mixed letters and digits, possible character substitution");
    }

    if normalized.chars().count() > MAX_URL_LEN {
        findings.add(10, "Unusually long URL");
    }

    let (score, band, flags) = findings.finish();
    let level = LinkRisk::from(band);
    tracing::debug!(host = %host, score, level = %level, "link scored");
    LinkVerdict {
        level,
        score,
        flags,
        summary: summary_for(level).to_string(),
    }
}

fn malformed(normalized: &str, reason: &str) -> LinkVerdict {
    tracing::debug!(len = normalized.len(), reason, "link failed to parse");
    let level = LinkRisk::from(Band::High);
    LinkVerdict {
        level,
        score: MALFORMED_SCORE,
        flags: vec!["Malformed or invalid URL".to_string()],
        summary: summary_for(level).to_string(),
    }
}
