use sauce::scan::tables::wifi_brands;
use sauce::{score_network, NetworkRisk};

#[test]
fn missing_security_mode_counts_as_open() {
    let with_none = score_network("CoffeeShop", None, None);
    let with_open = score_network("CoffeeShop", Some("OPEN"), None);
    assert_eq!(with_none, with_open);
    assert!(with_none
        .flags
        .iter()
        .any(|f| f == "Open network with no encryption"));
}

#[test]
fn unrecognized_mode_adds_nothing() {
    let v = score_network("HomeNetworkABC", Some("802.1X"), None);
    assert_eq!(v.score, 0);
    assert_eq!(v.level, NetworkRisk::Safe);
}

#[test]
fn legacy_wpa_on_isp_hotspot_name() {
    let v = score_network("xfinitywifi", Some("WPA"), None);
    // wpa 10 + brand 20
    assert_eq!(v.score, 30);
    assert_eq!(v.level, NetworkRisk::Medium);
    assert_eq!(
        v.flags,
        vec![
            "Legacy WPA encryption".to_string(),
            "Uses the name of xfinity".to_string(),
        ]
    );
}

#[test]
fn every_hotspot_brand_is_flagged() {
    for brand in wifi_brands() {
        let v = score_network(&format!("{brand}_guest"), Some("WPA2"), None);
        let expected = format!("Uses the name of {brand}");
        assert!(v.flags.contains(&expected), "{brand}: {:?}", v.flags);
    }
}

#[test]
fn long_conference_network() {
    let v = score_network(
        "Conference Room Guest Network For Visitors Only",
        Some("WPA2-PSK"),
        None,
    );
    // pattern 15 + long name 10
    assert_eq!(v.score, 25);
    assert_eq!(v.level, NetworkRisk::Low);
    assert_eq!(v.flags[0], "Generic public network name (conference)");
}

#[test]
fn separators_do_not_hide_patterns() {
    let a = score_network("free-airport-wifi", Some("OPEN"), None);
    let b = score_network("FREE AIRPORT WIFI", Some("OPEN"), None);
    let c = score_network("Free_Airport_WiFi", Some("OPEN"), None);
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn non_ascii_names_are_scored() {
    let v = score_network("café ☕ free", Some("open"), None);
    // open 30 + pattern "free" 15
    assert_eq!(v.score, 45);
    assert_eq!(v.level, NetworkRisk::Medium);
}

#[test]
fn hidden_and_open() {
    let v = score_network("", Some("NONE"), None);
    assert_eq!(v.score, 35);
    assert_eq!(
        v.flags,
        vec![
            "Open network with no encryption".to_string(),
            "Hidden network name".to_string(),
        ]
    );
}

#[test]
fn worst_case_is_capped() {
    let v = score_network(
        "Free Starbucks Airport WiFi Lounge For All Travelers",
        Some("WEP"),
        None,
    );
    // wep 25 + pattern 15 + brand 20 + free-brand 25 + long 10
    assert_eq!(v.score, 95);
    let v = score_network(
        "Free Starbucks Airport WiFi Lounge For All Travelers",
        None,
        None,
    );
    assert_eq!(v.score, 100);
    assert_eq!(v.level, NetworkRisk::High);
}

#[test]
fn verdict_json_shape() {
    let v = score_network("HomeNetworkABC", Some("WPA2"), Some("00:11:22:33:44:55"));
    let json = serde_json::to_value(&v).expect("json");
    assert_eq!(json["level"], "SAFE");
    assert_eq!(json["score"], 0);
    assert!(json["recommendation"].is_string());
    assert_eq!(json["flags"][0], "No suspicious patterns detected");
}
