//! Property-based tests for ntstatus_erref
//!
//! These tests use proptest to generate arbitrary status values and verify
//! that the accessors stay total, deterministic and mutually consistent.

use ntstatus_erref::{
    ENTRIES, Lookup, NtStatus, Severity, StatusLog, UNKNOWN_NAME, aliases, entry, error, name,
    severity,
};
use proptest::prelude::*;

/// Any `u32`, biased towards catalogued values so both branches get exercised.
fn any_status() -> impl Strategy<Value = NtStatus> {
    prop_oneof![
        any::<u32>().prop_map(NtStatus::new),
        (0..ENTRIES.len()).prop_map(|i| ENTRIES[i].status()),
    ]
}

fn catalogued_status() -> impl Strategy<Value = NtStatus> {
    (0..ENTRIES.len()).prop_map(|i| ENTRIES[i].status())
}

// ============================================================================
// DETERMINISM PROPERTIES
// ============================================================================

proptest! {
    /// Repeated calls return identical results
    #[test]
    fn accessors_are_idempotent(status in any_status()) {
        prop_assert_eq!(name(status), name(status));
        prop_assert_eq!(error(status), error(status));
        prop_assert_eq!(entry(status), entry(status));
    }
}

// ============================================================================
// COVERAGE PROPERTIES
// ============================================================================

proptest! {
    /// A known name implies a known message, and vice versa
    #[test]
    fn name_and_message_cover_same_codes(status in any_status()) {
        let known = name(status) != UNKNOWN_NAME;

        match error(status) {
            Lookup::Success => {
                prop_assert_eq!(status.value(), 0);
                prop_assert!(known);
            }
            Lookup::Failure(err) => {
                prop_assert!(known);
                prop_assert!(!err.message().is_empty());
                prop_assert_eq!(err.status(), status);
                prop_assert_eq!(err.name(), name(status));
            }
            Lookup::Unknown => prop_assert!(!known),
        }
    }

    /// Names are never empty, even for uncatalogued values
    #[test]
    fn names_are_never_empty(raw in any::<u32>()) {
        prop_assert!(!name(NtStatus::new(raw)).is_empty());
    }

    /// Every catalogued code yields a failure carrying its own code
    #[test]
    fn catalogued_codes_recover_their_value(status in catalogued_status()) {
        prop_assume!(status.value() != 0);
        let err = error(status).failure().expect("catalogued value");
        prop_assert_eq!(err.code(), status.value());
        prop_assert_eq!(NtStatus::from(err), status);
    }

    /// Alias lists start with the canonical name
    #[test]
    fn aliases_start_with_canonical(status in any_status()) {
        let names = aliases(status);
        match entry(status) {
            Some(entry) => prop_assert_eq!(names.first().copied(), Some(entry.name())),
            None => prop_assert!(names.is_empty()),
        }
    }
}

// ============================================================================
// SEVERITY PROPERTIES
// ============================================================================

proptest! {
    /// Severity depends only on the two high bits
    #[test]
    fn severity_ignores_low_bits(high in 0u32..4, low in 0u32..(1 << 30)) {
        let expected = match high {
            0 => Severity::Success,
            1 => Severity::Informational,
            2 => Severity::Warning,
            _ => Severity::Error,
        };
        prop_assert_eq!(severity(NtStatus::new((high << 30) | low)), expected);
    }

    /// is_success agrees with the signed NT_SUCCESS test
    #[test]
    fn is_success_matches_signed_test(raw in any::<u32>()) {
        let status = NtStatus::new(raw);
        prop_assert_eq!(status.is_success(), (raw as i32) >= 0);
        prop_assert_eq!(
            status.is_success(),
            matches!(status.severity(), Severity::Success | Severity::Informational)
        );
    }

    /// Bit fields reassemble into the original value
    #[test]
    fn bit_fields_reassemble(raw in any::<u32>()) {
        let status = NtStatus::new(raw);
        let severity_bits = raw & 0xC000_0000;
        let flag_bits = raw & 0x3000_0000;
        let rebuilt = severity_bits
            | flag_bits
            | (u32::from(status.facility()) << 16)
            | u32::from(status.code());
        prop_assert_eq!(rebuilt, raw);
        prop_assert_eq!(status.is_customer(), raw & 0x2000_0000 != 0);
    }
}

// ============================================================================
// DISPLAY PROPERTIES
// ============================================================================

proptest! {
    /// The hex form always parses back to the original value
    #[test]
    fn hex_form_round_trips(raw in any::<u32>()) {
        let rendered = NtStatus::new(raw).hex().to_string();
        prop_assert_eq!(rendered.len(), 10);
        prop_assert!(rendered.starts_with("0x"));
        prop_assert_eq!(u32::from_str_radix(&rendered[2..], 16).unwrap(), raw);
    }

    /// Failure display carries the hex form and the verbatim message
    #[test]
    fn failure_display_shape(status in catalogued_status()) {
        if let Lookup::Failure(err) = error(status) {
            let rendered = err.to_string();
            let expected_prefix = format!("NT_STATUS({}): ", status.hex());
            prop_assert!(rendered.starts_with(&expected_prefix));
            prop_assert!(rendered.ends_with(err.message()));
        }
    }

    /// Log lines never panic and always name the status
    #[test]
    fn log_line_names_status(status in any_status()) {
        let mut line = String::new();
        StatusLog::from_status(status).write_to(&mut line).unwrap();
        let expected_name = format!("name={}", name(status));
        prop_assert!(line.contains(&expected_name));
        prop_assert_eq!(line.contains(" message='"), entry(status).is_some());
    }
}

// ============================================================================
// CONCURRENT PROPERTIES
// ============================================================================

proptest! {
    /// Concurrent readers all observe the same catalog
    #[test]
    fn concurrent_lookups_agree(
        thread_count in 1usize..8,
        raw in any::<u32>(),
    ) {
        let status = NtStatus::new(raw);
        let expected = (name(status), error(status));

        let handles: Vec<_> = (0..thread_count)
            .map(|_| std::thread::spawn(move || (name(status), error(status))))
            .collect();

        for handle in handles {
            prop_assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
