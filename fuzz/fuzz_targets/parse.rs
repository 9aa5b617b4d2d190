#![no_main]

use libfuzzer_sys::fuzz_target;
use quill::{ArgumentListConfig, Source, parse_arguments, parse_outline};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let source = Source::from_text(s);
        // Errors are fine; panics and hangs are not
        if let Err(err) = parse_outline(source.clone()) {
            let _ = err.to_report(&source);
        }
        let _ = parse_arguments(source, &ArgumentListConfig::default());
    }
});
