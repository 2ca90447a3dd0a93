//! # NTSTATUS ERREF
//!
//! Static catalog of Windows NT status codes, as published in
//! [MS-ERREF] §2.3.1, with symbolic names and diagnostic messages.
//!
//! ## Design Philosophy
//!
//! 1. **One declaration per code**: every row is written once and expands into
//!    a named constant, an iteration table and a lookup arm
//! 2. **Total accessors**: every `u32` is a valid input; nothing panics
//! 3. **Success is not an error**: `STATUS_SUCCESS` never produces an error value
//! 4. **Unknown is not an error either**: the caller decides what an
//!    uncatalogued value means
//! 5. **Zero-allocation hot paths**: lookups return `'static` data by value
//!
//! ## Catalog Properties
//!
//! - Immutable and compiled in; there is no initialization step and no lock
//! - Lookup is a `match` over literal values, never a map
//! - Symbolic names drop the `STATUS_` prefix (`ACCESS_DENIED`, not
//!   `STATUS_ACCESS_DENIED`)
//! - Messages are lowercased MS-ERREF text; printf-style placeholders such as
//!   `%hs` are passed through untouched
//! - Where MS-ERREF publishes two identifiers for one value, the first one is
//!   canonical and the other is an alias constant (see [`ALIASES`])
//!
//! ## Quick Start
//!
//! ```rust
//! use ntstatus_erref::{definitions, error, name, Lookup, NtStatus};
//!
//! assert_eq!(name(NtStatus::new(0xC000_0022)), "ACCESS_DENIED");
//! assert_eq!(name(NtStatus::new(0xDEAD_BEEF)), "UNKNOWN");
//!
//! match error(definitions::OBJECT_NAME_NOT_FOUND) {
//!     Lookup::Failure(err) => {
//!         assert_eq!(err.code(), 0xC000_0034);
//!         assert_eq!(
//!             err.to_string(),
//!             "NT_STATUS(0xC0000034): the object name is not found."
//!         );
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! assert_eq!(error(definitions::SUCCESS), Lookup::Success);
//! assert_eq!(error(NtStatus::new(0xDEAD_BEEF)), Lookup::Unknown);
//! ```
//!
//! ## Propagating With `?`
//!
//! ```rust
//! use ntstatus_erref::{error, NtError, NtStatus};
//!
//! fn check(raw: u32) -> Result<(), NtError> {
//!     match error(NtStatus::new(raw)).into_result() {
//!         Some(result) => result,
//!         // Uncatalogued values are accepted here; a stricter caller could reject them.
//!         None => Ok(()),
//!     }
//! }
//!
//! assert!(check(0).is_ok());
//! assert_eq!(check(0xC000_000D).unwrap_err().code(), 0xC000_000D);
//! ```
//!
//! ## Structured Logging
//!
//! The crate never logs. [`StatusLog`] hands the fields of a status to the
//! caller's logger, or renders them as a single line without allocating.
//!
//! [MS-ERREF]: https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-erref/

#![warn(missing_docs)]
#![warn(clippy::all)]

use smallvec::SmallVec;

mod macros;

pub mod codes;
pub mod definitions;
pub mod logging;
pub mod models;

pub use codes::*;
pub use definitions::*;
pub use logging::*;
pub use models::*;

/// Name reported for values that are not in the catalog.
pub const UNKNOWN_NAME: &str = "UNKNOWN";

// ============================================================================
// Accessors
// ============================================================================

/// Look up the catalog row for a status.
///
/// This is the single lookup every other accessor is built on. Aliases are
/// not rows of their own, so the returned entry always carries the
/// canonical name.
#[inline]
pub const fn entry(status: NtStatus) -> Option<CatalogEntry> {
    definitions::lookup(status.value())
}

/// Bare symbolic name of a status, or [`UNKNOWN_NAME`] when uncatalogued.
///
/// Never empty. The returned string is `'static` and identical across calls.
///
/// ```rust
/// use ntstatus_erref::{name, NtStatus};
///
/// assert_eq!(name(NtStatus::new(0)), "SUCCESS");
/// assert_eq!(name(NtStatus::new(0x103)), "PENDING");
/// assert_eq!(name(NtStatus::new(0xC022_0018)), "FWP_TOO_MANY_BOOTTIME_FILTERS");
/// ```
#[inline]
pub const fn name(status: NtStatus) -> &'static str {
    match entry(status) {
        Some(entry) => entry.name(),
        None => UNKNOWN_NAME,
    }
}

/// Classify a status into [`Lookup::Success`], [`Lookup::Failure`] or
/// [`Lookup::Unknown`].
///
/// Only the literal success value `0x00000000` is `Success`. Every other
/// catalogued value, informational and warning codes included, produces a
/// [`NtError`] carrying the code and its message.
#[inline]
pub const fn error(status: NtStatus) -> Lookup {
    if status.value() == definitions::SUCCESS.value() {
        return Lookup::Success;
    }

    match entry(status) {
        Some(entry) => Lookup::Failure(NtError::new(entry.status(), entry.message())),
        None => Lookup::Unknown,
    }
}

/// Severity class of a status, from its two high bits.
///
/// Independent of the catalog: uncatalogued values classify too.
#[inline]
pub const fn severity(status: NtStatus) -> Severity {
    status.severity()
}

/// Every identifier published for a status, canonical name first.
///
/// Empty for uncatalogued values.
///
/// ```rust
/// use ntstatus_erref::{aliases, definitions};
///
/// assert_eq!(
///     aliases(definitions::FWP_TOO_MANY_CALLOUTS).as_slice(),
///     ["FWP_TOO_MANY_BOOTTIME_FILTERS", "FWP_TOO_MANY_CALLOUTS"]
/// );
/// ```
pub fn aliases(status: NtStatus) -> SmallVec<[&'static str; 2]> {
    let mut names = SmallVec::new();

    if let Some(entry) = entry(status) {
        names.push(entry.name());
        names.extend(
            ALIASES
                .iter()
                .filter(|(_, value)| *value == status)
                .map(|(alias, _)| *alias),
        );
    }

    names
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn success_is_not_an_error() {
        assert_eq!(name(definitions::SUCCESS), "SUCCESS");
        assert_eq!(error(definitions::SUCCESS), Lookup::Success);
        assert!(error(definitions::SUCCESS).failure().is_none());
    }

    #[test]
    fn unknown_is_distinct_from_success() {
        let status = NtStatus::new(0xDEAD_BEEF);
        assert_eq!(name(status), UNKNOWN_NAME);
        assert_eq!(error(status), Lookup::Unknown);
        assert_ne!(error(status), error(definitions::SUCCESS));
        assert!(entry(status).is_none());
    }

    #[test]
    fn non_error_severities_are_still_failures() {
        // Informational and warning values carry messages too.
        let pending = error(definitions::PENDING).failure().expect("catalogued");
        assert_eq!(pending.severity(), Severity::Success);
        assert!(pending.message().contains("pending completion"));

        let overflow = error(definitions::BUFFER_OVERFLOW).failure().expect("catalogued");
        assert_eq!(overflow.severity(), Severity::Warning);
    }

    #[test]
    fn failure_carries_catalog_message() {
        let err = error(definitions::ACCESS_DENIED).failure().expect("catalogued");
        assert_eq!(err.code(), 0xC000_0022);
        assert_eq!(Some(err.message()), entry(err.status()).map(|e| e.message()));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn aliases_resolve_to_canonical_name() {
        assert_eq!(name(definitions::WAIT_0), "SUCCESS");
        assert_eq!(name(definitions::ABANDONED_WAIT_0), "ABANDONED");
        assert_eq!(
            name(definitions::FWP_TOO_MANY_CALLOUTS),
            "FWP_TOO_MANY_BOOTTIME_FILTERS"
        );
    }

    #[test]
    fn aliases_list_canonical_first() {
        assert_eq!(aliases(definitions::SUCCESS).as_slice(), ["SUCCESS", "WAIT_0"]);
        assert_eq!(aliases(definitions::ACCESS_DENIED).as_slice(), ["ACCESS_DENIED"]);
        assert!(aliases(NtStatus::new(0xDEAD_BEEF)).is_empty());
        assert!(!aliases(definitions::ABANDONED).spilled());
    }

    #[test]
    fn severity_follows_high_bits() {
        assert_eq!(severity(NtStatus::new(0x0000_0000)), Severity::Success);
        assert_eq!(severity(NtStatus::new(0x4000_0000)), Severity::Informational);
        assert_eq!(severity(NtStatus::new(0x8000_0000)), Severity::Warning);
        assert_eq!(severity(NtStatus::new(0xC000_0001)), Severity::Error);
    }

    #[test]
    fn accessors_are_usable_in_const_context() {
        const NAME: &str = name(definitions::INVALID_PARAMETER);
        const IS_FAILURE: bool = !error(definitions::INVALID_PARAMETER).is_success();
        assert_eq!(NAME, "INVALID_PARAMETER");
        assert!(IS_FAILURE);
    }
}
