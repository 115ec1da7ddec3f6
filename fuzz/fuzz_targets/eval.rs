#![no_main]
use libfuzzer_sys::fuzz_target;

use rdex::eval;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = eval::<f64>(s);
    }
});
