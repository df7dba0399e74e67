#![no_main]
use chrono::Utc;
use libfuzzer_sys::fuzz_target;
use vigil_core::report::summary::format_times;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Timestamp formatting is total: garbage in, None out, no panic
        let _ = format_times(s, Utc::now());
    }
});
