#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let url = String::from_utf8_lossy(data);
    let verdict = sauce::score_link(&url);
    assert!(verdict.score <= 100);
    assert!(!verdict.flags.is_empty());
});
