//! Structured log record for NT status values.
//!
//! # Properties
//!
//! - Borrows from an [`NtError`] with an explicit lifetime
//! - Fields are exposed individually so the caller's logger decides the
//!   output format
//! - `write_to` renders one line straight into any `fmt::Write`
//! - No heap allocations in accessors or in `write_to`
//!
//! The crate itself never emits logs. A `StatusLog` exists only for the
//! duration of the caller's logging call.
//!
//! # Line Format
//!
//! ```text
//! [NT_STATUS(0xC0000022)] severity=error facility=0x000 name=ACCESS_DENIED message='...'
//! ```
//!
//! Uncatalogued values render `name=UNKNOWN` and omit `message`.

use crate::{NtError, NtStatus, Severity};
use std::fmt;

/// Structured view of a status for log pipelines.
///
/// # Example
///
/// ```rust
/// use ntstatus_erref::{definitions, error};
///
/// let err = error(definitions::ACCESS_DENIED).failure().unwrap();
/// let mut line = String::new();
/// err.log().write_to(&mut line).unwrap();
/// assert!(line.starts_with("[NT_STATUS(0xC0000022)] severity=error"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLog<'a> {
    status: NtStatus,
    name: &'a str,
    message: Option<&'a str>,
}

impl StatusLog<'static> {
    /// Build a record for an uncatalogued value.
    #[inline]
    pub const fn unknown(status: NtStatus) -> StatusLog<'static> {
        StatusLog {
            status,
            name: crate::UNKNOWN_NAME,
            message: None,
        }
    }

    /// Build a record for any value, catalogued or not.
    ///
    /// The success value is logged with its catalog message like any other
    /// entry.
    #[inline]
    pub const fn from_status(status: NtStatus) -> StatusLog<'static> {
        match crate::entry(status) {
            Some(entry) => StatusLog {
                status,
                name: entry.name(),
                message: Some(entry.message()),
            },
            None => StatusLog::unknown(status),
        }
    }
}

impl<'a> StatusLog<'a> {
    /// Write the record as a single line without allocating.
    ///
    /// ```rust,ignore
    /// let mut buffer = String::new();
    /// StatusLog::from_status(status).write_to(&mut buffer)?;
    /// ```
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[NT_STATUS({})] severity={} facility=0x{:03X} name={}",
            self.status.hex(),
            self.severity(),
            self.facility(),
            self.name
        )?;

        if let Some(message) = self.message {
            write!(f, " message='{}'", message)?;
        }

        Ok(())
    }

    /// Get the status value.
    #[inline]
    pub const fn status(&self) -> NtStatus {
        self.status
    }

    /// Get the bare symbolic name, or `UNKNOWN`.
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Severity class from the two high bits.
    #[inline]
    pub const fn severity(&self) -> Severity {
        self.status.severity()
    }

    /// Facility number (bits 16-27).
    #[inline]
    pub const fn facility(&self) -> u16 {
        self.status.facility()
    }

    /// Get the diagnostic message; `None` for uncatalogued values.
    #[inline]
    pub const fn message(&self) -> Option<&'a str> {
        self.message
    }

    /// True when the value was found in the catalog.
    #[inline]
    pub const fn is_catalogued(&self) -> bool {
        self.message.is_some()
    }
}

impl fmt::Display for StatusLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl NtError {
    /// Borrow this error as a structured log record.
    ///
    /// The record cannot outlive the error it was taken from.
    #[inline]
    pub fn log(&self) -> StatusLog<'_> {
        StatusLog {
            status: self.status(),
            name: self.name(),
            message: Some(self.message()),
        }
    }

    /// Hand the structured record to a closure and return its result.
    ///
    /// ```rust
    /// use ntstatus_erref::{definitions, error};
    ///
    /// let err = error(definitions::INVALID_PARAMETER).failure().unwrap();
    /// let facility = err.with_log(|log| log.facility());
    /// assert_eq!(facility, 0);
    /// ```
    #[inline]
    pub fn with_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StatusLog<'_>) -> R,
    {
        let log = self.log();
        f(&log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{definitions, error};

    fn render(log: &StatusLog<'_>) -> String {
        let mut line = String::new();
        log.write_to(&mut line).expect("writing to a String cannot fail");
        line
    }

    #[test]
    fn catalogued_error_line() {
        let err = error(definitions::OBJECT_NAME_NOT_FOUND)
            .failure()
            .expect("catalogued");

        assert_eq!(
            render(&err.log()),
            "[NT_STATUS(0xC0000034)] severity=error facility=0x000 \
             name=OBJECT_NAME_NOT_FOUND message='the object name is not found.'"
        );
    }

    #[test]
    fn unknown_line_has_no_message() {
        let log = StatusLog::from_status(NtStatus::new(0xDEAD_BEEF));

        assert!(!log.is_catalogued());
        assert_eq!(log, StatusLog::unknown(NtStatus::new(0xDEAD_BEEF)));
        assert_eq!(
            render(&log),
            "[NT_STATUS(0xDEADBEEF)] severity=error facility=0xEAD name=UNKNOWN"
        );
    }

    #[test]
    fn facility_is_rendered_padded() {
        let log = StatusLog::from_status(definitions::FWP_TOO_MANY_BOOTTIME_FILTERS);
        let line = render(&log);

        assert_eq!(log.facility(), 0x022);
        assert!(line.contains("facility=0x022"));
        assert!(line.contains("name=FWP_TOO_MANY_BOOTTIME_FILTERS"));
    }

    #[test]
    fn success_is_loggable() {
        let log = StatusLog::from_status(definitions::SUCCESS);
        assert_eq!(log.name(), "SUCCESS");
        assert_eq!(log.severity(), Severity::Success);
        assert!(log.message().is_some());
    }

    #[test]
    fn placeholders_are_not_expanded() {
        let log = StatusLog::from_status(definitions::NO_SUCH_FILE);
        assert!(render(&log).contains("the file %hs does not exist."));
    }

    #[test]
    fn display_matches_write_to() {
        let err = error(definitions::ACCESS_DENIED).failure().expect("catalogued");
        assert_eq!(err.log().to_string(), render(&err.log()));
        assert!(err.with_log(|log| log.name() == "ACCESS_DENIED"));
    }
}
