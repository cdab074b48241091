use sauce::scan::tables::KNOWN_SAFE_DOMAINS;
use sauce::{score_link, LinkRisk};

#[test]
fn trusted_domain_takes_fast_path() {
    let v = score_link("https://google.com/search");
    assert_eq!(v.level, LinkRisk::Low);
    assert_eq!(v.score, 5);
    assert_eq!(v.flags.len(), 1);
    assert!(v.flags[0].contains("google.com"));
}

#[test]
fn three_labels_on_any_safe_root_take_fast_path() {
    for root in KNOWN_SAFE_DOMAINS.iter() {
        let v = score_link(&format!("https://www.{root}/"));
        assert_eq!((v.level, v.score), (LinkRisk::Low, 5), "www.{root}");
    }
}

#[test]
fn four_labels_never_take_fast_path() {
    for root in KNOWN_SAFE_DOMAINS.iter() {
        let v = score_link(&format!("https://a.b.{root}/"));
        assert!(
            !v.flags.iter().any(|f| f.starts_with("Recognized domain")),
            "a.b.{root} was trusted"
        );
        assert!(v.flags.iter().any(|f| f.starts_with("Excessive subdomains")));
    }
}

#[test]
fn brand_on_cheap_tld_with_keywords() {
    let v = score_link("HTTPS://PAYPAL-billing-update.top/webscr?cmd=_login");
    assert_eq!(v.level, LinkRisk::High);
    // tld 20 + impersonation 30 + keywords 25 (capped)
    assert_eq!(v.score, 75);
    assert_eq!(
        v.flags,
        vec![
            "Suspicious top-level domain (.top)".to_string(),
            "Possible impersonation of paypal".to_string(),
            "Phishing keywords: login, update, billing".to_string(),
        ]
    );
}

#[test]
fn character_substitution_case() {
    let v = score_link("http://g00gle-secure-login.xyz/verify");
    assert_eq!(v.level, LinkRisk::High);
    assert!(v.score >= 60);
    assert!(v
        .flags
        .iter()
        .any(|f| f.contains("character substitution")));
}

#[test]
fn scheme_less_input_is_treated_as_http() {
    let v = score_link("example.org");
    assert_eq!(v.level, LinkRisk::Low);
    assert_eq!(v.score, 10);
    assert_eq!(v.flags, vec!["Unencrypted connection (http)".to_string()]);
}

#[test]
fn deep_foreign_host_with_port_and_keyword() {
    let v = score_link("https://shop.example.co.uk:8443/cart?invoice=1");
    // subdomains 15 + keyword 10 + port 10
    assert_eq!(v.score, 35);
    assert_eq!(v.level, LinkRisk::Medium);
}

#[test]
fn punycode_lookalike_is_at_least_medium() {
    let v = score_link("https://xn--pple-43d.com/signin");
    assert!(v.score >= 30, "score {}", v.score);
}

#[test]
fn malformed_inputs_are_high_risk() {
    for raw in ["not a url at all???", "http://", "", "   "] {
        let v = score_link(raw);
        assert_eq!(v.level, LinkRisk::High, "{raw:?}");
        assert_eq!(v.score, 90, "{raw:?}");
        assert_eq!(v.flags.len(), 1);
    }
}

#[test]
fn score_never_exceeds_cap() {
    let path = "login/".repeat(40);
    let url = format!("http://paypal.g00gle.account.verify.xyz:8081/{path}");
    let v = score_link(&url);
    assert_eq!(v.score, 100);
    assert_eq!(v.level, LinkRisk::High);
}

#[test]
fn verdict_json_shape() {
    let v = score_link("https://example.org/");
    let json = serde_json::to_value(&v).expect("json");
    assert_eq!(json["level"], "CLEAN");
    assert_eq!(json["score"], 0);
    assert!(json["flags"].is_array());
    assert!(json["summary"].is_string());
}
