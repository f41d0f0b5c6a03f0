//! GUIDs in canonical hyphenated form.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{FormatError, GUID_PATTERN, prelude::*};

#[allow(clippy::expect_used)]
static GUID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(GUID_PATTERN).expect("GUID pattern is a valid regex"));

/// Returns `true` if `text` is an 8-4-4-4-12 hex GUID whose version nibble is
/// `1`-`5` and whose variant nibble is `8`, `9`, `a` or `b` (either case).
///
/// Braced, URN-prefixed and unhyphenated spellings are rejected.
pub fn is_valid_guid(text: &str) -> bool {
    let valid = GUID_RE.is_match(text);
    if !valid {
        tracing::trace!(input = text, "rejected GUID");
    }
    valid
}

/// Text known to be a GUID, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Guid(String);

impl Guid {
    /// Returns the GUID text exactly as written
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Guid {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for Guid {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_guid(&value) {
            Ok(Self(value))
        } else {
            Err(FormatError::Guid(value))
        }
    }
}

impl AsRef<str> for Guid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
