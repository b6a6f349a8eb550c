//! In-memory snapshot archive and typed accessors.
//!
//! The archive is read-only input produced entirely by the simulation's
//! emitter; nothing here mutates it.  Agent state beyond the documented
//! accessor paths stays an opaque JSON value — analysis code reaches into it
//! only through [`AgentState::number`] with an explicit [`VarPath`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Deserialize;

use colony_core::{AgentId, SimTime, TimeWindow};

// ── VarPath ───────────────────────────────────────────────────────────────────

/// A path from an agent's root store to one of its variables, e.g.
/// `["boundary", "mass"]` or `["periplasm", "concentrations", "nitrocefin"]`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VarPath(Vec<String>);

impl VarPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VarPath(segments.into_iter().map(Into::into).collect())
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for VarPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// One agent's store hierarchy at one timepoint.
///
/// Kept as raw JSON: the simulation emits dozens of sub-stores and this
/// toolkit reads three things from them.  Every accessor reports missing
/// data as `None` so absence stays visible to callers.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct AgentState(serde_json::Value);

impl AgentState {
    /// The `boundary.dead` flag.  `None` when the boundary store or the flag
    /// itself is absent — callers decide how to treat unreported death.
    pub fn dead(&self) -> Option<bool> {
        self.0.get("boundary")?.get("dead")?.as_bool()
    }

    /// The `boundary.location` coordinate pair.
    pub fn location(&self) -> Option<[f64; 2]> {
        let arr = self.0.get("boundary")?.get("location")?.as_array()?;
        match arr.as_slice() {
            [x, y] => Some([x.as_f64()?, y.as_f64()?]),
            _ => None,
        }
    }

    /// A numeric variable at an arbitrary store path.
    pub fn number(&self, path: &VarPath) -> Option<f64> {
        let mut value = &self.0;
        for segment in path.segments() {
            value = value.get(segment)?;
        }
        value.as_f64()
    }

    /// The underlying JSON value, for callers with unanticipated needs.
    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

// ── TimePoint ─────────────────────────────────────────────────────────────────

/// The hierarchy emitted at one snapshot time.  Only the `agents` store is
/// decoded; environmental fields and dimensions are analysis concerns this
/// crate does not model.
#[derive(Clone, Debug, Deserialize)]
pub struct TimePoint {
    #[serde(default)]
    agents: BTreeMap<AgentId, AgentState>,
}

impl TimePoint {
    /// Agents present at this timepoint, in ID order.
    pub fn agents(&self) -> impl Iterator<Item = (&AgentId, &AgentState)> {
        self.agents.iter()
    }

    pub fn agent(&self, id: &str) -> Option<&AgentState> {
        self.agents.get(id)
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}

// ── SnapshotArchive ───────────────────────────────────────────────────────────

/// A full simulation run: snapshot timepoints in time order.
#[derive(Clone, Debug, Default)]
pub struct SnapshotArchive {
    timepoints: BTreeMap<SimTime, TimePoint>,
}

impl SnapshotArchive {
    pub(crate) fn from_timepoints(timepoints: BTreeMap<SimTime, TimePoint>) -> Self {
        SnapshotArchive { timepoints }
    }

    pub fn len(&self) -> usize {
        self.timepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timepoints.is_empty()
    }

    /// Snapshot times in ascending order.
    pub fn times(&self) -> impl Iterator<Item = SimTime> + '_ {
        self.timepoints.keys().copied()
    }

    /// The final snapshot time; `None` for an empty archive.
    pub fn max_time(&self) -> Option<SimTime> {
        self.timepoints.keys().next_back().copied()
    }

    pub fn timepoint(&self, t: SimTime) -> Option<&TimePoint> {
        self.timepoints.get(&t)
    }

    /// All timepoints in time order.
    pub fn iter(&self) -> impl Iterator<Item = (SimTime, &TimePoint)> {
        self.timepoints.iter().map(|(t, tp)| (*t, tp))
    }

    /// Timepoints whose time falls inside `window` (fractions of the final
    /// snapshot time, inclusive on both ends).  An empty archive yields an
    /// empty iterator.
    pub fn window_iter(
        &self,
        window: TimeWindow,
    ) -> impl Iterator<Item = (SimTime, &TimePoint)> {
        // Inverted bounds only occur for a (nonsensical) negative final
        // time; treat that as an empty window rather than panicking in
        // BTreeMap::range.
        let range = self
            .max_time()
            .map(|max| window.bounds(max))
            .filter(|(lo, hi)| lo <= hi);
        range
            .into_iter()
            .flat_map(|(lo, hi)| self.timepoints.range(lo..=hi))
            .map(|(t, tp)| (*t, tp))
    }

    /// Every agent ID observed at any timepoint of the run — the input set
    /// for phylogeny reconstruction.
    pub fn agent_ids(&self) -> BTreeSet<AgentId> {
        self.timepoints
            .values()
            .flat_map(|tp| tp.agents.keys().cloned())
            .collect()
    }
}
