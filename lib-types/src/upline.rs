//! Upline (sponsor) chain above a seller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::errors::{TypesError, TypesResult};

/// Deepest sponsor level that earns from a sale
pub const MAX_UPLINE_DEPTH: u8 = 7;

/// Consultant identifier as issued by the membership system
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsultantId(String);

impl ConsultantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConsultantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ConsultantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ConsultantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sponsor at a given depth (1 = direct sponsor)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UplineEntry {
    pub depth: u8,
    pub consultant: ConsultantId,
}

/// Validated sponsor chain: depths in `1..=7`, each at most once, sorted.
///
/// Gaps are allowed (a sponsor slot may be vacant); a vacant slot simply
/// earns nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<UplineEntry>", into = "Vec<UplineEntry>")]
pub struct UplineChain {
    entries: Vec<UplineEntry>,
}

impl UplineChain {
    /// Chain with no sponsors; the seller keeps everything
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate and sort explicit entries
    pub fn new(mut entries: Vec<UplineEntry>) -> TypesResult<Self> {
        let mut seen = BTreeSet::new();
        for entry in &entries {
            if entry.depth == 0 || entry.depth > MAX_UPLINE_DEPTH {
                return Err(TypesError::UplineDepthOutOfRange {
                    depth: entry.depth as usize,
                    max: MAX_UPLINE_DEPTH as usize,
                });
            }
            if !seen.insert(entry.depth) {
                return Err(TypesError::DuplicateUplineDepth { depth: entry.depth });
            }
        }
        entries.sort_by_key(|entry| entry.depth);
        Ok(Self { entries })
    }

    /// Build from sponsors listed nearest first (index 0 = depth 1)
    pub fn from_sponsors<I, C>(sponsors: I) -> TypesResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<ConsultantId>,
    {
        let mut entries = Vec::new();
        for (index, consultant) in sponsors.into_iter().enumerate() {
            let depth = index + 1;
            if depth > MAX_UPLINE_DEPTH as usize {
                return Err(TypesError::UplineDepthOutOfRange {
                    depth,
                    max: MAX_UPLINE_DEPTH as usize,
                });
            }
            entries.push(UplineEntry {
                depth: depth as u8,
                consultant: consultant.into(),
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending depth order
    pub fn entries(&self) -> &[UplineEntry] {
        &self.entries
    }

    /// Sponsor at `depth`, if the slot is filled
    pub fn at_depth(&self, depth: u8) -> Option<&ConsultantId> {
        self.entries
            .iter()
            .find(|entry| entry.depth == depth)
            .map(|entry| &entry.consultant)
    }

    /// Direct (depth-1) sponsor
    pub fn sponsor(&self) -> Option<&ConsultantId> {
        self.at_depth(1)
    }
}

impl TryFrom<Vec<UplineEntry>> for UplineChain {
    type Error = TypesError;

    fn try_from(entries: Vec<UplineEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<UplineChain> for Vec<UplineEntry> {
    fn from(chain: UplineChain) -> Self {
        chain.entries
    }
}
