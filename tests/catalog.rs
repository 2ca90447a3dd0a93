//! End-to-end checks of the public accessors against known MS-ERREF rows.

use ntstatus_erref::{
    ALIASES, ENTRIES, Lookup, NtStatus, Severity, UNKNOWN_NAME, aliases, definitions, error, name,
    severity,
};

/// (code, name, substrings expected in the error display)
const SCENARIOS: &[(u32, &str, &[&str])] = &[
    (0xC000_0022, "ACCESS_DENIED", &["0xC0000022", "access denied"]),
    (0xC000_000D, "INVALID_PARAMETER", &["0xC000000D", "invalid parameter"]),
    (0xC000_0034, "OBJECT_NAME_NOT_FOUND", &["0xC0000034", "object name is not found"]),
    (0x0000_0103, "PENDING", &["0x00000103", "pending completion"]),
];

#[test]
fn success_produces_no_error() {
    let status = NtStatus::new(0x0000_0000);
    assert_eq!(name(status), "SUCCESS");
    assert_eq!(error(status), Lookup::Success);
}

#[test]
fn known_failures_render_code_and_message() {
    for &(code, expected_name, fragments) in SCENARIOS {
        let status = NtStatus::new(code);
        assert_eq!(name(status), expected_name);

        let err = match error(status) {
            Lookup::Failure(err) => err,
            other => panic!("{expected_name}: expected a failure, got {other:?}"),
        };
        assert_eq!(err.code(), code);

        let rendered = err.to_string();
        for fragment in fragments {
            assert!(
                rendered.contains(fragment),
                "{rendered:?} does not contain {fragment:?}"
            );
        }
    }
}

#[test]
fn unknown_code_is_reported_as_unknown() {
    let status = NtStatus::new(0xDEAD_BEEF);
    assert_eq!(name(status), UNKNOWN_NAME);
    assert_eq!(name(status), "UNKNOWN");
    assert_eq!(error(status), Lookup::Unknown);
}

#[test]
fn every_constant_round_trips_through_name() {
    for entry in ENTRIES {
        assert_eq!(name(entry.status()), entry.name());
    }
    assert_eq!(name(definitions::RPC_NT_INVALID_BINDING), "RPC_NT_INVALID_BINDING");
    assert_eq!(name(definitions::DBG_CONTINUE), "DBG_CONTINUE");
    assert_eq!(definitions::ACCESS_DENIED.value(), 0xC000_0022);
}

#[test]
fn alias_constants_share_canonical_values() {
    for &(alias, status) in ALIASES {
        assert_ne!(name(status), alias);
        assert_ne!(name(status), UNKNOWN_NAME);
    }
    assert_eq!(definitions::FWP_TOO_MANY_CALLOUTS.value(), 0xC022_0018);
    assert_eq!(name(NtStatus::new(0xC022_0018)), "FWP_TOO_MANY_BOOTTIME_FILTERS");
}

#[test]
fn boot_time_filter_limit_is_named_after_its_message() {
    let status = NtStatus::new(0xC022_0018);
    assert_eq!(name(status), "FWP_TOO_MANY_BOOTTIME_FILTERS");

    let err = error(status).failure().expect("catalogued");
    assert_eq!(err.name(), "FWP_TOO_MANY_BOOTTIME_FILTERS");
    assert!(err.message().contains("boot-time filters"));
    assert_eq!(
        aliases(status).as_slice(),
        ["FWP_TOO_MANY_BOOTTIME_FILTERS", "FWP_TOO_MANY_CALLOUTS"]
    );
}

#[test]
fn graphics_errors_are_catalogued() {
    let cases = [
        (0xC01E_0000, "GRAPHICS_NOT_EXCLUSIVE_MODE_OWNER"),
        (0xC01E_0001, "GRAPHICS_INSUFFICIENT_DMA_BUFFER"),
        (0xC01E_0100, "GRAPHICS_NO_VIDEO_MEMORY"),
        (0xC01E_0300, "GRAPHICS_INVALID_VIDPN_TOPOLOGY"),
        (0xC01E_05E8, "GRAPHICS_SESSION_TYPE_CHANGE_IN_PROGRESS"),
    ];

    for (code, expected) in cases {
        let status = NtStatus::new(code);
        assert_eq!(name(status), expected);
        assert_eq!(status.facility(), 0x01E);
        let err = error(status).failure().expect("catalogued");
        assert!(!err.message().is_empty());
    }

    let err = error(definitions::GRAPHICS_NO_VIDEO_MEMORY).failure().expect("catalogued");
    assert!(err.to_string().contains("not enough video memory"));
}

#[test]
fn severity_scenarios() {
    assert_eq!(severity(NtStatus::new(0x0000_0000)), Severity::Success);
    assert_eq!(severity(NtStatus::new(0x4000_0000)), Severity::Informational);
    assert_eq!(severity(NtStatus::new(0x8000_0000)), Severity::Warning);
    assert_eq!(severity(NtStatus::new(0xC000_0001)), Severity::Error);
}

#[test]
fn shared_messages_are_preserved() {
    let create = error(definitions::UNEXPECTED_MM_CREATE_ERR).failure().unwrap();
    let map = error(definitions::UNEXPECTED_MM_MAP_ERROR).failure().unwrap();
    assert_eq!(create.message(), map.message());
    assert_ne!(create, map);
}

#[test]
fn placeholders_pass_through_verbatim() {
    let err = error(definitions::NO_SUCH_FILE).failure().unwrap();
    assert!(err.message().contains("%hs"));

    let placeholders = ENTRIES.iter().filter(|entry| entry.has_placeholder()).count();
    assert!(placeholders > 0);
}

#[test]
fn wire_bytes_round_trip() {
    for entry in ENTRIES {
        let wire = entry.status().value().to_le_bytes();
        assert_eq!(NtStatus::new(u32::from_le_bytes(wire)), entry.status());
    }
}
