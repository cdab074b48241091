use crate::common::{LINK_CORPUS, NETWORK_CORPUS};
use sauce::{score_link, score_network};

#[test]
fn link_scores_are_bounded_and_flagged() {
    for url in LINK_CORPUS {
        let v = score_link(url);
        assert!(v.score <= 100, "{url}: {}", v.score);
        assert!(!v.flags.is_empty(), "{url}: no flags");
        assert!(!v.summary.is_empty());
    }
}

#[test]
fn network_scores_are_bounded_and_flagged() {
    for (ssid, mode) in NETWORK_CORPUS {
        let v = score_network(ssid, *mode, Some("00:11:22:33:44:55"));
        assert!(v.score <= 100, "{ssid}: {}", v.score);
        assert!(!v.flags.is_empty(), "{ssid}: no flags");
        assert!(!v.recommendation.is_empty());
    }
}

#[test]
fn link_verdicts_are_stable_for_same_input() {
    for url in LINK_CORPUS {
        let a = score_link(url);
        let b = score_link(url);
        assert_eq!(a, b, "verdicts differ across identical runs for {url}");
        let ja = serde_json::to_string(&a).expect("json a");
        let jb = serde_json::to_string(&b).expect("json b");
        assert_eq!(ja, jb);
    }
}

#[test]
fn network_verdicts_are_stable_for_same_input() {
    for (ssid, mode) in NETWORK_CORPUS {
        assert_eq!(score_network(ssid, *mode, None), score_network(ssid, *mode, None));
    }
}

#[test]
fn identifier_does_not_change_the_verdict() {
    for (ssid, mode) in NETWORK_CORPUS {
        assert_eq!(
            score_network(ssid, *mode, None),
            score_network(ssid, *mode, Some("de:ad:be:ef:00:01"))
        );
    }
}

#[test]
fn scoring_is_safe_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                LINK_CORPUS
                    .iter()
                    .map(|u| score_link(u).score)
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let expected: Vec<u8> = LINK_CORPUS.iter().map(|u| score_link(u).score).collect();
    for h in handles {
        assert_eq!(h.join().expect("thread"), expected);
    }
}
