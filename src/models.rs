//! Catalog entries and the values handed back by the accessors.
//!
//! # Three-Valued Lookup
//!
//! [`crate::error`] distinguishes three outcomes that must never collapse
//! into each other:
//!
//! | Outcome            | Meaning                                   |
//! |--------------------|-------------------------------------------|
//! | `Lookup::Success`  | the value is `STATUS_SUCCESS`; no error   |
//! | `Lookup::Failure`  | catalogued non-success value              |
//! | `Lookup::Unknown`  | nothing is known about the value          |
//!
//! Callers receiving `Unknown` should fall back to rendering the raw hex
//! form of the status (see [`NtStatus::hex`]).
//!
//! # Copy Semantics
//!
//! Every type here is two or three words of `'static` data, so all of them
//! are `Copy`. Producing an [`NtError`] never allocates.

use crate::{NtStatus, Severity};
use std::fmt;

// ============================================================================
// Catalog Entry
// ============================================================================

/// One row of the catalog: value, bare symbolic name, diagnostic message.
///
/// Messages are stored verbatim (lowercased MS-ERREF prose). Placeholders
/// such as `%hs` or `0x%08lx` are left in place for the caller to expand.
///
/// Entries come only from the catalog; code outside this crate cannot
/// build one:
///
/// ```compile_fail
/// use ntstatus_erref::{CatalogEntry, NtStatus};
///
/// let forged = CatalogEntry::new(NtStatus::new(0xE000_0001), "FORGED", "not a catalog row.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    status: NtStatus,
    name: &'static str,
    message: &'static str,
}

impl CatalogEntry {
    /// Constructor used by `define_nt_status!`.
    pub(crate) const fn new(
        status: NtStatus,
        name: &'static str,
        message: &'static str,
    ) -> Self {
        Self {
            status,
            name,
            message,
        }
    }

    /// Get the status value.
    #[inline]
    pub const fn status(&self) -> NtStatus {
        self.status
    }

    /// Get the bare symbolic name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the diagnostic message, verbatim.
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Check whether the message carries a printf-style placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.message.contains('%')
    }
}

// ============================================================================
// NtError (Structured Failure)
// ============================================================================

/// A catalogued, non-success NT status together with its message.
///
/// The numeric value stays recoverable through [`NtError::status`] and
/// [`NtError::code`], so callers can branch on it without parsing the
/// display string.
///
/// # Display
///
/// `NT_STATUS(0xHHHHHHHH): <message>`. The `NT_STATUS` prefix is kept here
/// for operator familiarity even though symbolic names drop it.
///
/// # Example
///
/// ```rust
/// use ntstatus_erref::{error, definitions};
///
/// let err = error(definitions::ACCESS_DENIED).failure().unwrap();
/// assert_eq!(err.code(), 0xC000_0022);
/// assert!(err.to_string().starts_with("NT_STATUS(0xC0000022): "));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NtError {
    status: NtStatus,
    message: &'static str,
}

impl NtError {
    #[inline]
    pub(crate) const fn new(status: NtStatus, message: &'static str) -> Self {
        Self { status, message }
    }

    /// Get the status value.
    #[inline]
    pub const fn status(&self) -> NtStatus {
        self.status
    }

    /// Get the raw numeric code.
    #[inline]
    pub const fn code(&self) -> u32 {
        self.status.value()
    }

    /// Get the diagnostic message, verbatim.
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Get the bare symbolic name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.status.name()
    }

    /// Severity class of the status.
    #[inline]
    pub const fn severity(&self) -> Severity {
        self.status.severity()
    }
}

impl fmt::Display for NtError {
    /// Zero-allocation formatting - writes directly to formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NT_STATUS({}): {}", self.status.hex(), self.message)
    }
}

impl std::error::Error for NtError {}

impl From<NtError> for NtStatus {
    #[inline]
    fn from(err: NtError) -> Self {
        err.status
    }
}

// ============================================================================
// Lookup Result
// ============================================================================

/// Outcome of [`crate::error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// `STATUS_SUCCESS`: no error object is produced.
    Success,
    /// A catalogued value other than success.
    Failure(NtError),
    /// The value is not in the catalog.
    Unknown,
}

impl Lookup {
    /// True for [`Lookup::Success`].
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// True for [`Lookup::Unknown`].
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The structured error, if this is a catalogued failure.
    #[inline]
    pub const fn failure(self) -> Option<NtError> {
        match self {
            Self::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Collapse into `Result` for `?`-style propagation.
    ///
    /// Returns `None` for [`Lookup::Unknown`]; the caller decides whether an
    /// uncatalogued value is an error.
    #[inline]
    pub const fn into_result(self) -> Option<Result<(), NtError>> {
        match self {
            Self::Success => Some(Ok(())),
            Self::Failure(err) => Some(Err(err)),
            Self::Unknown => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions;

    #[test]
    fn nt_error_exposes_code_without_parsing() {
        let err = NtError::new(definitions::OBJECT_NAME_NOT_FOUND, "the object name is not found.");
        assert_eq!(err.code(), 0xC000_0034);
        assert_eq!(err.status(), definitions::OBJECT_NAME_NOT_FOUND);
        assert_eq!(err.name(), "OBJECT_NAME_NOT_FOUND");
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(NtStatus::from(err), definitions::OBJECT_NAME_NOT_FOUND);
    }

    #[test]
    fn nt_error_display_format() {
        let err = NtError::new(NtStatus::new(0x103), "the operation that was requested is pending completion.");
        assert_eq!(
            err.to_string(),
            "NT_STATUS(0x00000103): the operation that was requested is pending completion."
        );
    }

    #[test]
    fn nt_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&NtError::new(NtStatus::new(0xC000_0001), "unsuccessful"));
    }

    #[test]
    fn lookup_helpers() {
        let err = NtError::new(NtStatus::new(0xC000_0001), "unsuccessful");

        assert!(Lookup::Success.is_success());
        assert!(Lookup::Unknown.is_unknown());
        assert_eq!(Lookup::Failure(err).failure(), Some(err));
        assert_eq!(Lookup::Success.failure(), None);

        assert_eq!(Lookup::Success.into_result(), Some(Ok(())));
        assert_eq!(Lookup::Failure(err).into_result(), Some(Err(err)));
        assert_eq!(Lookup::Unknown.into_result(), None);
    }

    #[test]
    fn entry_placeholder_detection() {
        let plain = CatalogEntry::new(NtStatus::new(1), "X", "plain text.");
        let formatted = CatalogEntry::new(NtStatus::new(2), "Y", "value %hs here.");
        assert!(!plain.has_placeholder());
        assert!(formatted.has_placeholder());
    }
}
