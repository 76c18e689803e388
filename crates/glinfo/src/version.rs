//! GL version tuples
//!
//! Versions compare lexicographically: (3, 0) < (3, 3) < (4, 0).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct VersionTuple {
    pub major: u32,
    pub minor: u32,
}

impl VersionTuple {
    /// Reported when the context is missing or the driver string is unreadable.
    pub const ZERO: VersionTuple = VersionTuple::new(0, 0);

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse the leading `X.Y` token of a driver version string such as
    /// `"2.1 Metal - 90.5"` or `"4.6.0 NVIDIA 535.104.05"`.
    ///
    /// The minor component is optional (`"3"` parses as 3.0). Returns `None`
    /// for an empty string or a non-numeric leading token.
    pub fn parse_leading(raw: &str) -> Option<Self> {
        let token = raw.split_whitespace().next()?;
        let mut parts = token.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };
        Some(Self::new(major, minor))
    }

    /// Like [`parse_leading`](Self::parse_leading) but degrades to
    /// [`VersionTuple::ZERO`].
    pub fn from_version_string(raw: &str) -> Self {
        Self::parse_leading(raw).unwrap_or(Self::ZERO)
    }

    /// `(major, minor)` form used by the text report.
    pub fn to_pair_string(&self) -> String {
        format!("({}, {})", self.major, self.minor)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<(u32, u32)> for VersionTuple {
    fn from((major, minor): (u32, u32)) -> Self {
        Self::new(major, minor)
    }
}

impl std::fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
