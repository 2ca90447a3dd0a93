#![no_main]

use libfuzzer_sys::fuzz_target;
use ntstatus_erref::{Lookup, NtStatus, UNKNOWN_NAME, aliases, entry, error, name};

fuzz_target!(|data: &[u8]| {
    for chunk in data.chunks_exact(4) {
        let raw = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let status = NtStatus::new(raw);

        let known = name(status) != UNKNOWN_NAME;
        assert_eq!(known, entry(status).is_some());

        match error(status) {
            Lookup::Success => assert_eq!(raw, 0),
            Lookup::Failure(err) => {
                assert!(known);
                assert_eq!(err.code(), raw);
            }
            Lookup::Unknown => assert!(!known),
        }

        assert_eq!(aliases(status).is_empty(), !known);
    }
});
