//! Candidate identification and per-candidate data storage.
//!
//! ## CandidateId
//!
//! Dense, 0-based roster position. The first candidate added to a roster
//! is `CandidateId(0)`.
//!
//! ## CandidateMap
//!
//! Per-candidate data backed by `Vec` for O(1) access. Iteration always
//! walks roster order, which is what makes tie-breaks reproducible.
//!
//! ## Roster
//!
//! The ordered, name-unique list of candidates for one session.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{Result, SessionError};

/// Candidate identifier: the candidate's position in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub u32);

impl CandidateId {
    /// Create a new candidate ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all candidate IDs for a roster of `count` candidates.
    ///
    /// ```
    /// use swipe_vote::core::CandidateId;
    ///
    /// let ids: Vec<_> = CandidateId::all(3).collect();
    /// assert_eq!(ids, vec![CandidateId::new(0), CandidateId::new(1), CandidateId::new(2)]);
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = CandidateId> {
        (0..count as u32).map(CandidateId)
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Candidate {}", self.0)
    }
}

/// Opaque handle to a candidate's display asset.
///
/// The engine never interprets it; the UI resolves it to an image.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef(pub String);

impl AssetRef {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A person being voted on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Display name, unique within a session.
    pub name: String,

    /// Display asset handle. Defaults to the name, matching asset catalogs
    /// keyed by friend name.
    pub asset: AssetRef,
}

impl Candidate {
    /// Create a candidate whose asset handle is its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            asset: AssetRef(name.clone()),
            name,
        }
    }

    /// Set the asset handle.
    #[must_use]
    pub fn with_asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = AssetRef(asset.into());
        self
    }
}

/// Per-candidate data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use swipe_vote::core::{CandidateId, CandidateMap};
///
/// let mut votes: CandidateMap<i64> = CandidateMap::with_value(3, 0);
/// votes[CandidateId::new(1)] += 1;
///
/// assert_eq!(votes[CandidateId::new(1)], 1);
/// assert_eq!(votes.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateMap<T> {
    data: Vec<T>,
}

impl<T> CandidateMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(count: usize, factory: impl Fn(CandidateId) -> T) -> Self {
        let data = CandidateId::all(count).map(factory).collect();
        Self { data }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self { data: vec![value; count] }
    }

    /// Number of candidates covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a candidate's entry, or `None` if the ID is out of range.
    #[must_use]
    pub fn get(&self, id: CandidateId) -> Option<&T> {
        self.data.get(id.index())
    }

    /// Get a mutable entry, or `None` if the ID is out of range.
    pub fn get_mut(&mut self, id: CandidateId) -> Option<&mut T> {
        self.data.get_mut(id.index())
    }

    /// Iterate over (CandidateId, &T) pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (CandidateId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (CandidateId(i as u32), v))
    }

    /// Iterate over the values in roster order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<CandidateId> for CandidateMap<T> {
    type Output = T;

    fn index(&self, id: CandidateId) -> &Self::Output {
        &self.data[id.index()]
    }
}

impl<T> IndexMut<CandidateId> for CandidateMap<T> {
    fn index_mut(&mut self, id: CandidateId) -> &mut Self::Output {
        &mut self.data[id.index()]
    }
}

/// Ordered list of candidates with name lookup.
///
/// Roster order is the stable order used for round refills and for the
/// winner tie-break.
#[derive(Clone, Debug)]
pub struct Roster {
    candidates: Vec<Candidate>,
    by_name: FxHashMap<String, CandidateId>,
}

impl Roster {
    /// Build a roster, rejecting an empty list and duplicate names.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self> {
        if candidates.is_empty() {
            return Err(SessionError::EmptySessionData("roster has no candidates"));
        }

        let mut by_name = FxHashMap::default();
        for (i, candidate) in candidates.iter().enumerate() {
            if by_name.insert(candidate.name.clone(), CandidateId(i as u32)).is_some() {
                return Err(SessionError::DuplicateCandidate(candidate.name.clone()));
            }
        }

        Ok(Self { candidates, by_name })
    }

    /// Build a roster from names, using each name as the asset handle.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Candidate::new).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false for a constructed roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.get(id.index())
    }

    /// Look up a candidate by name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<CandidateId> {
        self.by_name.get(name).copied()
    }

    /// All IDs in roster order.
    pub fn ids(&self) -> impl Iterator<Item = CandidateId> {
        CandidateId::all(self.candidates.len())
    }

    /// Iterate over (CandidateId, &Candidate) pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (CandidateId, &Candidate)> {
        self.candidates
            .iter()
            .enumerate()
            .map(|(i, c)| (CandidateId(i as u32), c))
    }
}
