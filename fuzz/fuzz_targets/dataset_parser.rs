#![no_main]

use libfuzzer_sys::fuzz_target;
use paygap::loader;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Arbitrary CSV content must either load or fail cleanly
        let _ = loader::parse_dataset(input);
    }
});
