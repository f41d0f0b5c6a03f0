/// Human-readable name of the strict date layout
pub const DATE_LAYOUT: &str = "DD/MM/YYYY";

/// Whole-string pattern for the strict date layout, capturing day, month, year.
/// ASCII digits only: `\d` would also admit other Unicode decimal digits.
pub const DATE_PATTERN: &str = r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$";

/// Largest year a four-digit layout can name (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Months per year, used when rolling overflowing months into years
pub(crate) const MONTHS_PER_YEAR: i32 = 12;

/// A single IPv6 group: one to four hex digits
pub const HEXTET_PATTERN: &str = "[0-9A-Fa-f]{1,4}";

/// Dotted-decimal IPv4 suffix. Octet values are not range-checked.
pub const DOTTED_QUAD_PATTERN: &str = r"(?:[0-9]{1,3}\.){3}[0-9]{1,3}";

/// Number of hextets in a fully written IPv6 address
pub const IPV6_GROUPS: usize = 8;

/// Hextets left in front of a dotted quad, which stands in for the last two
pub const IPV6_GROUPS_BEFORE_QUAD: usize = IPV6_GROUPS - 2;

/// Canonical 8-4-4-4-12 GUID with a version 1-5 nibble and an RFC variant nibble
pub const GUID_PATTERN: &str =
    "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$";

/// Earliest release year the album services accept
pub const ALBUM_EARLIEST_YEAR: u16 = 1900;
