//! Agent identifier type.
//!
//! Agent IDs are opaque strings emitted by the simulation.  Structurally each
//! ID is a shared *stem* (the longest common prefix over a run's IDs)
//! followed by a *phylogeny suffix* of decimal digit characters, one per
//! division event in the agent's ancestry.  Interpreting that structure is
//! the job of `colony-phylo`; this type only carries the string around with
//! ordering and map-key support.

use std::borrow::Borrow;
use std::fmt;

/// An agent's identifier string.
///
/// `Ord + Hash + Borrow<str>` so IDs work as `BTreeSet`/`HashMap` keys and
/// sets can be probed with plain `&str` without an allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        AgentId(id.into())
    }

    /// View the ID as a plain string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the ID in bytes.  Suffix digits are ASCII, so for the IDs
    /// this toolkit accepts byte length equals character count.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AgentId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        AgentId(s.to_owned())
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        AgentId(s)
    }
}
