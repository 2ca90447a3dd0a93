//! Catalog definition macros.
//!
//! The catalog is written once, as a flat list of
//! `NAME = (value, "message")` rows. [`define_nt_status!`] expands that
//! single list into everything the crate needs, so the named constants,
//! the iteration table and the lookup table cannot drift apart:
//!
//! - one `pub const NAME: NtStatus` per row
//! - `ENTRIES`, every row in declaration order
//! - `lookup(u32)`, a `match` over literal values that the compiler lowers
//!   to a jump table or binary search; no map type, nothing mutable
//!
//! Values must be integer literals because they are reused as match
//! patterns. A duplicated value trips the `unreachable_patterns` lint,
//! which `definitions` denies.

/// Expand the catalog rows into constants, `ENTRIES` and `lookup`.
macro_rules! define_nt_status {
    ($( $name:ident = ($value:literal, $message:literal) ),+ $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($value), "`: ", $message)]
            pub const $name: $crate::NtStatus = $crate::NtStatus::new($value);
        )+

        /// Every canonical catalog entry, in MS-ERREF order.
        pub static ENTRIES: &[$crate::CatalogEntry] = &[
            $( $crate::CatalogEntry::new($name, stringify!($name), $message), )+
        ];

        /// Constant-time lookup of a raw value.
        #[deny(unreachable_patterns)]
        pub(crate) const fn lookup(value: u32) -> Option<$crate::CatalogEntry> {
            match value {
                $(
                    $value => Some($crate::CatalogEntry::new(
                        $name,
                        stringify!($name),
                        $message,
                    )),
                )+
                _ => None,
            }
        }
    };
}

/// Declare alternate identifiers that share a value with a canonical entry.
///
/// Each alias becomes a `pub const` equal to its canonical constant and a
/// row in `ALIASES`. Aliases never enter the lookup table, so
/// [`crate::name`] always reports the canonical identifier.
macro_rules! define_status_aliases {
    ($( $alias:ident => $canonical:ident ),+ $(,)?) => {
        $(
            #[doc = concat!("Alias of [`", stringify!($canonical), "`].")]
            pub const $alias: $crate::NtStatus = $canonical;
        )+

        /// Alternate identifiers, each paired with the shared value.
        pub static ALIASES: &[(&str, $crate::NtStatus)] = &[
            $( (stringify!($alias), $alias), )+
        ];
    };
}

pub(crate) use define_nt_status;
pub(crate) use define_status_aliases;
