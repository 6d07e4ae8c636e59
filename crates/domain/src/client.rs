//! Client identity derivation.
//!
//! Callers are bucketed by a composite of the forwarded network address and
//! the declared user agent. The identity is deterministic per request and is
//! the key for quota counters and block flags. Requests that arrive without
//! either header share the literal `unknown` bucket.

use std::fmt::{Display, Formatter};

/// Derived key used to bucket rate-limit and block state per caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    /// Maximum length of the derived identity, in characters.
    pub const MAX_LENGTH: usize = 64;

    const UNKNOWN: &'static str = "unknown";

    /// Derives a client identity from the forwarded address and user agent.
    ///
    /// Missing or empty parts fail open to the literal `unknown`. The
    /// combined `{address}:{agent}` value is truncated to
    /// [`Self::MAX_LENGTH`] characters.
    #[must_use]
    pub fn derive(forwarded_for: Option<&str>, user_agent: Option<&str>) -> Self {
        let address = forwarded_for
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(Self::UNKNOWN);
        let agent = user_agent
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(Self::UNKNOWN);

        let combined: String = format!("{address}:{agent}")
            .chars()
            .take(Self::MAX_LENGTH)
            .collect();

        Self(combined)
    }

    /// Returns the derived identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns an abbreviated form suitable for log entries.
    #[must_use]
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(10).collect();
        format!("{prefix}...")
    }
}

impl Display for ClientId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
