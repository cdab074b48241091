#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (ssid, mode) = match text.split_once('\0') {
        Some((ssid, mode)) => (ssid, Some(mode)),
        None => (&*text, None),
    };
    let verdict = sauce::score_network(ssid, mode, None);
    assert!(verdict.score <= 100);
    assert!(!verdict.flags.is_empty());
});
