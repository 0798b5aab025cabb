#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Accepted codes must decode and normalize without panicking,
        // and their canonical form must validate again.
        if let Ok(code) = fiscale::FiscalCode::create(s) {
            let _ = code.parts();
            let base = code.base();
            assert!(fiscale::FiscalCode::create(base.value()).is_ok());
            assert!(code.is_same_person(&base));
        }
    }
});
