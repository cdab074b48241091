//! Wi-Fi network risk scoring.

use super::tables::{
    wifi_brands, DEFAULT_ROUTER_NAMES, IMPERSONATION_TARGETS, SUSPICIOUS_WIFI_PATTERNS,
};
use super::{Findings, NetworkRisk, NetworkVerdict};

const HIDDEN_SSID: &str = "(hidden)";
const MAX_SSID_LEN: usize = 32;
const BAND_SUFFIXES: &[&str] = &["5g", "2g"];

const RECOMMEND_HIGH: &str =
    "Avoid this network. If you must connect, use a VPN and do not sign in to sensitive accounts.";
const RECOMMEND_MEDIUM: &str =
    "Use caution on this network. Prefer a VPN and avoid banking or shopping while connected.";
const RECOMMEND_LOW: &str =
    "This network looks mostly safe. Keep your device updated and watch for unexpected login pages.";
const RECOMMEND_SAFE: &str = "No risks detected. This network appears safe to use.";

fn recommendation_for(level: NetworkRisk) -> &'static str {
    match level {
        NetworkRisk::High => RECOMMEND_HIGH,
        NetworkRisk::Medium => RECOMMEND_MEDIUM,
        NetworkRisk::Low => RECOMMEND_LOW,
        NetworkRisk::Safe => RECOMMEND_SAFE,
    }
}

/// Declared link-layer security of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityMode {
    Open,
    Wep,
    Wpa,
    Modern,
    Unknown,
}

impl SecurityMode {
    /// Classify a free-form security label such as `"WPA2-PSK"` or `"open"`.
    /// An absent label is treated as an open network.
    pub fn classify(mode: Option<&str>) -> Self {
        let upper = mode.unwrap_or_default().trim().to_ascii_uppercase();
        if upper.is_empty() || upper == "OPEN" || upper == "NONE" {
            SecurityMode::Open
        } else if upper.contains("WPA2") || upper.contains("WPA3") {
            SecurityMode::Modern
        } else if upper.contains("WEP") {
            SecurityMode::Wep
        } else if upper.contains("WPA") {
            SecurityMode::Wpa
        } else {
            SecurityMode::Unknown
        }
    }
}

/// Case-fold and drop whitespace, underscores and hyphens.
pub fn normalize_ssid(ssid: &str) -> String {
    ssid.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_default_router_name(normalized: &str) -> bool {
    if DEFAULT_ROUTER_NAMES.contains(normalized) {
        return true;
    }
    BAND_SUFFIXES.iter().any(|suffix| {
        normalized
            .strip_suffix(suffix)
            .is_some_and(|base| DEFAULT_ROUTER_NAMES.contains(base))
    })
}

/// Score a wireless network by name and declared security.
///
/// `identifier` (usually the BSSID) is recorded in the trace output only.
pub fn score_network(
    ssid: &str,
    security_mode: Option<&str>,
    identifier: Option<&str>,
) -> NetworkVerdict {
    let normalized = normalize_ssid(ssid);
    let mut findings = Findings::default();

    match SecurityMode::classify(security_mode) {
        SecurityMode::Open => findings.add(30, "Open network with no encryption"),
        SecurityMode::Wep => findings.add(25, "Outdated WEP encryption"),
        SecurityMode::Wpa => findings.add(10, "Legacy WPA encryption"),
        SecurityMode::Modern | SecurityMode::Unknown => {}
    }

    if let Some(pattern) = SUSPICIOUS_WIFI_PATTERNS
        .iter()
        .find(|p| normalized.contains(*p))
    {
        findings.add(15, format!("Generic public network name ({pattern})"));
    }

    if let Some(brand) = wifi_brands().iter().find(|b| normalized.contains(*b)) {
        findings.add(20, format!("Uses the name of {brand}"));
    }

    if is_default_router_name(&normalized) {
        findings.add(10, "Factory-default router name");
    }

    let trimmed = ssid.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(HIDDEN_SSID) {
        findings.add(5, "Hidden network name");
    }

    if normalized.contains("free") {
        if let Some(brand) = IMPERSONATION_TARGETS
            .iter()
            .find(|b| normalized.contains(*b))
        {
            findings.add(25, format!("Free Wi-Fi offered under the {brand} name"));
        }
    }

    if ssid.chars().count() > MAX_SSID_LEN {
        findings.add(10, "Unusually long network name");
    }

    let (score, band, flags) = findings.finish();
    let level = NetworkRisk::from(band);
    tracing::debug!(
        ssid = %ssid,
        identifier = identifier.unwrap_or("-"),
        score,
        level = %level,
        "network scored"
    );
    NetworkVerdict {
        level,
        score,
        flags,
        recommendation: recommendation_for(level).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_mode_classification() {
        assert_eq!(SecurityMode::classify(None), SecurityMode::Open);
        assert_eq!(SecurityMode::classify(Some("")), SecurityMode::Open);
        assert_eq!(SecurityMode::classify(Some("open")), SecurityMode::Open);
        assert_eq!(SecurityMode::classify(Some("NONE")), SecurityMode::Open);
        assert_eq!(SecurityMode::classify(Some("WEP")), SecurityMode::Wep);
        assert_eq!(SecurityMode::classify(Some("wpa-psk")), SecurityMode::Wpa);
        assert_eq!(SecurityMode::classify(Some("WPA2-PSK")), SecurityMode::Modern);
        assert_eq!(SecurityMode::classify(Some("WPA3")), SecurityMode::Modern);
        assert_eq!(SecurityMode::classify(Some("802.1X")), SecurityMode::Unknown);
    }

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize_ssid("Free_Airport WiFi-5G"), "freeairportwifi5g");
    }

    #[test]
    fn default_router_names_with_band_suffix() {
        assert!(is_default_router_name("netgear"));
        assert!(is_default_router_name("netgear5g"));
        assert!(is_default_router_name("dlink2g"));
        assert!(!is_default_router_name("netgear42"));
    }

    #[test]
    fn open_airport_hotspot() {
        let v = score_network("Free_Airport_WiFi", Some("OPEN"), None);
        assert_eq!(v.score, 45);
        assert_eq!(v.level, NetworkRisk::Medium);
        assert_eq!(v.flags[0], "Open network with no encryption");
        assert_eq!(v.flags[1], "Generic public network name (airport)");
        assert_eq!(v.recommendation, RECOMMEND_MEDIUM);
    }

    #[test]
    fn home_network_with_wpa2_is_safe() {
        let v = score_network("HomeNetworkABC", Some("WPA2"), None);
        assert_eq!(v.score, 0);
        assert_eq!(v.level, NetworkRisk::Safe);
        assert_eq!(v.flags, vec![crate::scan::NO_PATTERNS_FLAG.to_string()]);
        assert_eq!(v.recommendation, RECOMMEND_SAFE);
    }

    #[test]
    fn free_brand_bonus_stacks() {
        let v = score_network("Free Starbucks WiFi", Some("OPEN"), Some("aa:bb:cc:dd:ee:ff"));
        // open 30 + pattern 15 + brand 20 + free-brand 25
        assert_eq!(v.score, 90);
        assert_eq!(v.level, NetworkRisk::High);
        assert_eq!(v.flags.len(), 4);
    }

    #[test]
    fn free_bonus_uses_the_full_brand_list() {
        let v = score_network("FreeChaseWifi", Some("WPA2"), None);
        // pattern "free" 15 + free-brand 25, chase is not a hotspot brand
        assert_eq!(v.score, 40);
        assert!(!v.flags.iter().any(|f| f.starts_with("Uses the name of")));
    }

    #[test]
    fn hidden_network() {
        let v = score_network("(hidden)", Some("WPA2"), None);
        assert_eq!(v.score, 5);
        assert_eq!(v.level, NetworkRisk::Low);
        let v = score_network("", Some("WPA3"), None);
        assert_eq!(v.flags, vec!["Hidden network name".to_string()]);
    }

    #[test]
    fn long_default_and_wep() {
        let v = score_network("NETGEAR-5G", Some("WEP"), None);
        assert_eq!(v.score, 35);
        let long = "x".repeat(40);
        let v = score_network(&long, Some("WPA2"), None);
        assert_eq!(v.flags, vec!["Unusually long network name".to_string()]);
    }
}
