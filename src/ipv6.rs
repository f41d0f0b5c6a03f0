//! IPv6 textual literals.
//!
//! The grammar is a closed set of alternatives, one for each way the eight
//! hextets may be written: in full, with a single `::` eliding a run of zero
//! groups, or with the last two groups written as a dotted quad. Literals are
//! only accepted or rejected; no 128-bit address value is built.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    DOTTED_QUAD_PATTERN, FormatError, HEXTET_PATTERN, IPV6_GROUPS, IPV6_GROUPS_BEFORE_QUAD,
    prelude::*,
};

#[allow(clippy::expect_used)]
static IPV6_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!("^(?:{})$", alternatives().join("|"));
    Regex::new(&pattern).expect("IPv6 alternatives form a valid regex")
});

/// Returns `true` if `text` is, in its entirety, an IPv6 literal.
///
/// Accepts fully written addresses, `::` compression anywhere (including the
/// bare `::`) and a dotted-quad suffix after either. Rejects dangling colons,
/// non-hex digits, a second `::`, wrong group counts and surrounding
/// whitespace. The groups in front of a dotted quad are not required to be
/// `::ffff:` or any other particular prefix.
pub fn is_valid_ipv6(text: &str) -> bool {
    let valid = IPV6_RE.is_match(text);
    if !valid {
        tracing::trace!(input = text, "rejected IPv6 literal");
    }
    valid
}

/// `min..=max` hextets, each followed by a colon.
fn groups_then_colon(min: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    format!("(?:{HEXTET_PATTERN}:){{{min},{max}}}")
}

/// `min..=max` hextets, each preceded by a colon.
fn colon_then_groups(min: usize, max: usize) -> String {
    format!("(?::{HEXTET_PATTERN}){{{min},{max}}}")
}

/// `h:h:h:h:h:h:h:h`
fn full() -> String {
    let head = IPV6_GROUPS - 1;
    format!("{}{HEXTET_PATTERN}", groups_then_colon(head, head))
}

/// `::`, every group elided
fn unspecified() -> String {
    "::".to_owned()
}

/// `::h` up to `::h:h:h:h:h:h:h`
fn leading_compressed() -> String {
    format!(":{}", colon_then_groups(1, IPV6_GROUPS - 1))
}

/// `h::` up to `h:h:h:h:h:h:h::`
fn trailing_compressed() -> String {
    format!("{}:", groups_then_colon(1, IPV6_GROUPS - 1))
}

/// `h::h` through `h:h:h:h:h:h::h`, groups on both sides of the marker
fn embedded_compressed() -> impl Iterator<Item = String> {
    (1..IPV6_GROUPS - 1).map(|head| {
        let tail = IPV6_GROUPS - 1 - head;
        format!("{}{}", groups_then_colon(head, head), colon_then_groups(1, tail))
    })
}

/// `h:h:h:h:h:h:d.d.d.d`
fn ipv4_full() -> String {
    let head = IPV6_GROUPS_BEFORE_QUAD;
    format!("{}{DOTTED_QUAD_PATTERN}", groups_then_colon(head, head))
}

/// `::d.d.d.d`, `::ffff:d.d.d.d`, `h::h:d.d.d.d` and the rest: at most five
/// written hextets split around the marker, then the quad
fn ipv4_compressed() -> impl Iterator<Item = String> {
    let written = IPV6_GROUPS_BEFORE_QUAD - 1;
    (0..=written).map(move |head| {
        let tail = groups_then_colon(0, written - head);
        if head == 0 {
            format!("::{tail}{DOTTED_QUAD_PATTERN}")
        } else {
            format!("{}:{tail}{DOTTED_QUAD_PATTERN}", groups_then_colon(head, head))
        }
    })
}

fn alternatives() -> Vec<String> {
    let mut alternatives = vec![
        full(),
        unspecified(),
        leading_compressed(),
        trailing_compressed(),
        ipv4_full(),
    ];
    alternatives.extend(embedded_compressed());
    alternatives.extend(ipv4_compressed());
    alternatives
}

/// Text known to be an IPv6 literal, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ipv6Literal(String);

impl Ipv6Literal {
    /// Returns the literal text exactly as written
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ipv6Literal {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for Ipv6Literal {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_ipv6(&value) {
            Ok(Self(value))
        } else {
            Err(FormatError::Ipv6(value))
        }
    }
}

impl AsRef<str> for Ipv6Literal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
