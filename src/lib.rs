//! Strict validators for untrusted text fields.
//!
//! Three independent checks, each a pure function of its input:
//!
//! - [`parse_strict_date`] turns `DD/MM/YYYY` text into a [`CalendarDate`],
//!   rejecting dates that do not exist (`31/02/2023`).
//! - [`is_valid_ipv6`] accepts full, `::`-compressed and IPv4-suffixed IPv6
//!   literals.
//! - [`is_valid_guid`] accepts canonical hyphenated version 1-5 GUIDs.
//!
//! Rejection is an ordinary outcome: the predicates return `false`, the date
//! parser returns `None`, and nothing panics. Callers wanting a reason can use
//! the `FromStr` impls on [`CalendarDate`], [`Ipv6Literal`] and [`Guid`],
//! which report a [`FormatError`]. Application policy such as a plausible
//! year range lives in [`YearWindow`], separate from format checks.

mod consts;
mod date;
mod guid;
mod ipv6;
mod prelude;
mod year_window;

pub use consts::*;
pub use date::{CalendarDate, DateTriple, parse_strict_date};
pub use guid::{Guid, is_valid_guid};
pub use ipv6::{Ipv6Literal, is_valid_ipv6};
pub use year_window::{WindowError, YearWindow};

use crate::prelude::*;

/// Text did not have the expected shape.
///
/// Every variant is the same kind of failure; the variant only records which
/// shape was expected, along with the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FormatError {
    #[display(fmt = "Invalid date format: {:?} (expected {})", "_0", DATE_LAYOUT)]
    DateLayout(String),
    #[display(fmt = "No such calendar date: {_0}")]
    NonexistentDate(DateTriple),
    #[display(fmt = "Invalid IPv6 address: {_0:?}")]
    Ipv6(String),
    #[display(fmt = "Invalid GUID: {_0:?}")]
    Guid(String),
}

impl std::error::Error for FormatError {}
