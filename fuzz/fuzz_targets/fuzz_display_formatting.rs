#![no_main]

use libfuzzer_sys::fuzz_target;
use ntstatus_erref::{NtStatus, StatusLog, error};
use std::fmt::Write;

fuzz_target!(|raw: u32| {
    let status = NtStatus::new(raw);
    let mut buffer = String::new();

    write!(buffer, "{status}").unwrap();
    assert!(buffer.ends_with(&format!("({})", status.hex())));

    buffer.clear();
    StatusLog::from_status(status).write_to(&mut buffer).unwrap();
    assert!(buffer.starts_with("[NT_STATUS(0x"));

    if let Some(err) = error(status).failure() {
        let rendered = err.to_string();
        assert!(rendered.starts_with("NT_STATUS(0x"));
        assert!(rendered.ends_with(err.message()));
    }
});
