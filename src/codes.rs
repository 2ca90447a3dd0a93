//! The NTSTATUS value type.
//!
//! An NTSTATUS is a 32-bit value laid out as (MS-ERREF §2.3):
//!
//! ```text
//!  3 3 2 2 2 2 2 2 2 2 2 2 1 1 1 1 1 1 1 1 1 1
//!  1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0
//! +---+-+-+-----------------------+-------------------------------+
//! |Sev|C|N|       Facility        |             Code              |
//! +---+-+-+-----------------------+-------------------------------+
//! ```
//!
//! - **Sev**: severity class, see [`Severity`]
//! - **C**: customer bit; set for values defined outside Microsoft
//! - **N**: reserved, must be zero
//! - **Facility**: the subsystem that owns the value (RPC, cluster, FWP, ...)
//! - **Code**: the facility-specific status
//!
//! # Zero-Allocation Guarantee
//!
//! Construction, comparison, bit-field extraction and formatting never touch
//! the heap. `Display` writes straight into the caller's formatter.
//!
//! Note: `Display` itself is allocation-free; `to_string()` allocates in user code.
//!
//! # Example
//!
//! ```rust
//! use ntstatus_erref::{NtStatus, Severity};
//!
//! let status = NtStatus::new(0xC000_0022);
//! assert_eq!(status.severity(), Severity::Error);
//! assert_eq!(status.hex().to_string(), "0xC0000022");
//! assert_eq!(status.to_string(), "ACCESS_DENIED(0xC0000022)");
//! ```

use std::fmt;

// ============================================================================
// Bit Layout
// ============================================================================

const SEVERITY_SHIFT: u32 = 30;
const CUSTOMER_BIT: u32 = 1 << 29;
const RESERVED_BIT: u32 = 1 << 28;
const FACILITY_SHIFT: u32 = 16;
const FACILITY_MASK: u32 = 0x0FFF;
const CODE_MASK: u32 = 0xFFFF;

// ============================================================================
// Severity Classification
// ============================================================================

/// Severity class carried in the top two bits of every status value.
///
/// Derived purely from the bit pattern; no catalog lookup is involved, so
/// codes absent from the catalog still classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// `00`: the operation completed.
    Success,
    /// `01`: completed, with something worth reporting.
    Informational,
    /// `10`: completed with a condition the caller should look at.
    Warning,
    /// `11`: the operation failed.
    Error,
}

impl Severity {
    /// Classify a raw 32-bit status by its two high bits.
    #[inline]
    pub const fn from_bits(value: u32) -> Self {
        match value >> SEVERITY_SHIFT {
            0b00 => Self::Success,
            0b01 => Self::Informational,
            0b10 => Self::Warning,
            _ => Self::Error,
        }
    }

    /// Lowercase label used by `Display` and structured logs.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Informational => "informational",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// NtStatus (Primary Value Type)
// ============================================================================

/// A Windows NT status code.
///
/// A transparent wrapper over the raw `u32` so status values cannot be
/// mixed up with handles, lengths or Win32 error numbers. Equality and
/// ordering follow the underlying integer.
///
/// The value is bit-exact with the wire representation: protocols such as
/// SMB2 carry it as a little-endian `u32`, and `u32::from_le_bytes` followed
/// by [`NtStatus::new`] (or the reverse) never reinterprets it.
///
/// # Formatting
///
/// - `{}` renders `NAME(0xHHHHHHHH)`, e.g. `ACCESS_DENIED(0xC0000022)`
/// - [`NtStatus::hex`] renders only `0xHHHHHHHH`
/// - [`NtStatus::name`] yields the bare symbolic name
/// - `{:x}` / `{:X}` format the raw integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct NtStatus(u32);

impl NtStatus {
    /// Wrap a raw status value. Total; every `u32` is a valid status.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Wrap a status received through a signed API (`NTSTATUS` is a
    /// `LONG` in the Windows headers). The bits are taken as-is.
    #[inline]
    pub const fn from_signed(value: i32) -> Self {
        Self(value as u32)
    }

    /// Get the raw numeric value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Get the value as the signed integer the Windows headers use.
    #[inline]
    pub const fn as_signed(self) -> i32 {
        self.0 as i32
    }

    /// Severity class from bits 30-31.
    #[inline]
    pub const fn severity(self) -> Severity {
        Severity::from_bits(self.0)
    }

    /// `NT_SUCCESS` semantics: success and informational values pass,
    /// warnings and errors do not.
    #[inline]
    pub const fn is_success(self) -> bool {
        self.as_signed() >= 0
    }

    /// True only for the error severity class.
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self.severity(), Severity::Error)
    }

    /// Customer bit (bit 29).
    #[inline]
    pub const fn is_customer(self) -> bool {
        self.0 & CUSTOMER_BIT != 0
    }

    /// Reserved `N` bit (bit 28). Always clear in MS-ERREF values.
    #[inline]
    pub const fn is_reserved_set(self) -> bool {
        self.0 & RESERVED_BIT != 0
    }

    /// Facility number (bits 16-27).
    #[inline]
    pub const fn facility(self) -> u16 {
        ((self.0 >> FACILITY_SHIFT) & FACILITY_MASK) as u16
    }

    /// Facility-specific code (bits 0-15).
    #[inline]
    pub const fn code(self) -> u16 {
        (self.0 & CODE_MASK) as u16
    }

    /// Bare symbolic name, or `"UNKNOWN"` when the value is not catalogued.
    #[inline]
    pub const fn name(self) -> &'static str {
        crate::name(self)
    }

    /// Zero-allocation `0xHHHHHHHH` formatter.
    #[inline]
    pub const fn hex(self) -> Hex {
        Hex(self.0)
    }
}

impl From<u32> for NtStatus {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<NtStatus> for u32 {
    #[inline]
    fn from(status: NtStatus) -> Self {
        status.0
    }
}

impl fmt::Display for NtStatus {
    /// Zero-allocation formatting - writes directly to formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.hex())
    }
}

impl fmt::LowerHex for NtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for NtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Canonical hexadecimal rendering of a status: `0x` plus eight uppercase digits.
///
/// Returned by [`NtStatus::hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hex(u32);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Severity Tests
    // ========================================================================

    #[test]
    fn severity_boundaries() {
        assert_eq!(Severity::from_bits(0x0000_0000), Severity::Success);
        assert_eq!(Severity::from_bits(0x3FFF_FFFF), Severity::Success);
        assert_eq!(Severity::from_bits(0x4000_0000), Severity::Informational);
        assert_eq!(Severity::from_bits(0x8000_0000), Severity::Warning);
        assert_eq!(Severity::from_bits(0xBFFF_FFFF), Severity::Warning);
        assert_eq!(Severity::from_bits(0xC000_0001), Severity::Error);
        assert_eq!(Severity::from_bits(u32::MAX), Severity::Error);
    }

    #[test]
    fn severity_display_is_lowercase() {
        assert_eq!(Severity::Informational.to_string(), "informational");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    // ========================================================================
    // Bit Field Tests
    // ========================================================================

    #[test]
    fn nt_success_semantics() {
        assert!(NtStatus::new(0).is_success());
        assert!(NtStatus::new(0x4000_0000).is_success());
        assert!(!NtStatus::new(0x8000_0005).is_success());
        assert!(!NtStatus::new(0xC000_0022).is_success());
        assert!(NtStatus::new(0xC000_0022).is_error());
        assert!(!NtStatus::new(0x8000_0005).is_error());
    }

    #[test]
    fn facility_and_code_extraction() {
        // RPC_NT_INVALID_BINDING
        let status = NtStatus::new(0xC002_0003);
        assert_eq!(status.facility(), 0x002);
        assert_eq!(status.code(), 0x0003);
        assert!(!status.is_customer());
        assert!(!status.is_reserved_set());

        let custom = NtStatus::new(0xE001_0042);
        assert!(custom.is_customer());
        assert_eq!(custom.facility(), 0x001);
    }

    #[test]
    fn signed_round_trip_is_bit_exact() {
        let status = NtStatus::from_signed(-1_073_741_790);
        assert_eq!(status.value(), 0xC000_0022);
        assert_eq!(status.as_signed(), -1_073_741_790);
        assert_eq!(u32::from(NtStatus::from(0xDEAD_BEEF)), 0xDEAD_BEEF);
    }

    #[test]
    fn little_endian_wire_round_trip() {
        let wire = 0xC000_0034u32.to_le_bytes();
        assert_eq!(wire, [0x34, 0x00, 0x00, 0xC0]);
        let status = NtStatus::new(u32::from_le_bytes(wire));
        assert_eq!(status.value().to_le_bytes(), wire);
    }

    // ========================================================================
    // Formatting Tests
    // ========================================================================

    #[test]
    fn hex_form_is_padded_and_uppercase() {
        assert_eq!(NtStatus::new(0x103).hex().to_string(), "0x00000103");
        assert_eq!(NtStatus::new(0xC000_000D).hex().to_string(), "0xC000000D");
        assert_eq!(format!("{:x}", NtStatus::new(0xC000_000D)), "c000000d");
        assert_eq!(format!("{:08X}", NtStatus::new(0x103)), "00000103");
    }

    #[test]
    fn display_combines_name_and_hex() {
        assert_eq!(NtStatus::new(0).to_string(), "SUCCESS(0x00000000)");
        assert_eq!(
            NtStatus::new(0xDEAD_BEEF).to_string(),
            "UNKNOWN(0xDEADBEEF)"
        );
    }

    #[test]
    fn ordering_follows_integer() {
        assert!(NtStatus::new(1) < NtStatus::new(2));
        assert!(NtStatus::new(0x8000_0000) < NtStatus::new(0xC000_0000));
        assert_eq!(NtStatus::default(), NtStatus::new(0));
    }
}
