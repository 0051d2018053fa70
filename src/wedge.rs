//! Wedge composition matching: tolerant, similarity-ranked search over the
//! sign catalog keyed by stroke counts.
//!
//! A [`WedgeComposition`] counts the four stroke kinds of a sign (horizontal,
//! vertical, oblique, winkelhaken). The matcher compares a target composition
//! against every catalog sign that carries one, using a single qualifying
//! predicate ([`matches_within`]) shared by the tolerant search, the exact
//! match, and the stroke-count range query.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::SignCatalog;
use crate::error::{MatchError, MatchResult};
use crate::sign::Sign;

/// Stroke-count signature of a sign, or a user-specified search target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WedgeComposition {
    /// Horizontal wedge strokes.
    pub horizontal: u32,
    /// Vertical wedge strokes.
    pub vertical: u32,
    /// Oblique/diagonal wedge strokes.
    pub oblique: u32,
    /// Winkelhaken (corner) impressions.
    pub winkelhaken: u32,
}

impl WedgeComposition {
    /// The all-zero composition.
    pub const EMPTY: WedgeComposition = WedgeComposition::new(0, 0, 0, 0);

    pub const fn new(horizontal: u32, vertical: u32, oblique: u32, winkelhaken: u32) -> Self {
        Self {
            horizontal,
            vertical,
            oblique,
            winkelhaken,
        }
    }

    /// Build a composition from signed counts, rejecting negatives.
    ///
    /// The in-library representation is unsigned, so this is the validation
    /// point for counts arriving from untrusted callers (CLI arguments,
    /// deserialized input).
    pub fn checked(
        horizontal: i64,
        vertical: i64,
        oblique: i64,
        winkelhaken: i64,
    ) -> MatchResult<Self> {
        Ok(Self::new(
            checked_axis("horizontal", horizontal)?,
            checked_axis("vertical", vertical)?,
            checked_axis("oblique", oblique)?,
            checked_axis("winkelhaken", winkelhaken)?,
        ))
    }

    /// Total stroke count across all four axes.
    pub fn total(&self) -> u32 {
        self.horizontal + self.vertical + self.oblique + self.winkelhaken
    }

    /// Sum of per-axis absolute differences against `other`.
    fn distance(&self, other: &WedgeComposition) -> u32 {
        self.horizontal.abs_diff(other.horizontal)
            + self.vertical.abs_diff(other.vertical)
            + self.oblique.abs_diff(other.oblique)
            + self.winkelhaken.abs_diff(other.winkelhaken)
    }
}

fn checked_axis(axis: &'static str, value: i64) -> MatchResult<u32> {
    u32::try_from(value).map_err(|_| MatchError::NegativeCount { axis, value })
}

/// Per-axis allowance of stroke-count difference for tolerant matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tolerance {
    pub horizontal: u32,
    pub vertical: u32,
    pub oblique: u32,
    pub winkelhaken: u32,
}

impl Tolerance {
    /// Exact matching: zero allowance on every axis.
    pub const ZERO: Tolerance = Tolerance::uniform(0);

    /// The same allowance on all four axes.
    pub const fn uniform(n: u32) -> Self {
        Self {
            horizontal: n,
            vertical: n,
            oblique: n,
            winkelhaken: n,
        }
    }

    /// Build a uniform tolerance from a signed value, rejecting negatives.
    pub fn checked_uniform(n: i64) -> MatchResult<Self> {
        match u32::try_from(n) {
            Ok(n) => Ok(Self::uniform(n)),
            Err(_) => Err(MatchError::NegativeTolerance {
                axis: "uniform",
                value: n,
            }),
        }
    }
}

impl Default for Tolerance {
    /// One stroke of slack per axis, the matcher's usual search setting.
    fn default() -> Self {
        Self::uniform(1)
    }
}

/// A catalog sign paired with how closely it matched the search target.
#[derive(Debug, Clone, Serialize)]
pub struct SignSearchResult<'a> {
    pub sign: &'a Sign,
    /// Similarity in `[0, 1]`; 1.0 is an identical composition.
    pub match_score: f32,
}

/// The qualifying predicate: every axis within its tolerance.
pub fn matches_within(a: &WedgeComposition, b: &WedgeComposition, tolerance: &Tolerance) -> bool {
    a.horizontal.abs_diff(b.horizontal) <= tolerance.horizontal
        && a.vertical.abs_diff(b.vertical) <= tolerance.vertical
        && a.oblique.abs_diff(b.oblique) <= tolerance.oblique
        && a.winkelhaken.abs_diff(b.winkelhaken) <= tolerance.winkelhaken
}

/// Similarity between two compositions in `[0, 1]`.
///
/// Two all-zero compositions are identical (1.0); a zero composition against
/// a non-zero one shares nothing (0.0). Otherwise the per-axis absolute
/// differences are summed and normalized by the larger total stroke count.
pub fn similarity(a: &WedgeComposition, b: &WedgeComposition) -> f32 {
    let total_a = a.total();
    let total_b = b.total();

    if total_a == 0 && total_b == 0 {
        return 1.0;
    }
    if total_a == 0 || total_b == 0 {
        return 0.0;
    }

    let max_total = total_a.max(total_b) as f32;
    (1.0 - a.distance(b) as f32 / max_total).max(0.0)
}

/// Find catalog signs matching `target` within `tolerance`, ranked by
/// descending similarity. Ties keep catalog order (stable sort).
///
/// Signs without a recorded composition never qualify. An all-zero target is
/// treated as "no filter specified" and returns no results; use
/// [`exact_match`] to ask for literally strokeless signs.
pub fn search<'a>(
    catalog: &'a SignCatalog,
    target: &WedgeComposition,
    tolerance: &Tolerance,
) -> Vec<SignSearchResult<'a>> {
    if target.total() == 0 {
        tracing::debug!("wedge search with empty target; returning no results");
        return Vec::new();
    }

    let mut results: Vec<SignSearchResult<'a>> = catalog
        .signs()
        .iter()
        .filter_map(|sign| {
            let composition = sign.composition.as_ref()?;
            matches_within(composition, target, tolerance).then(|| SignSearchResult {
                sign,
                match_score: similarity(composition, target),
            })
        })
        .collect();

    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    results
}

/// Signs whose composition equals `target` exactly.
pub fn exact_match<'a>(catalog: &'a SignCatalog, target: &WedgeComposition) -> Vec<&'a Sign> {
    catalog
        .signs()
        .iter()
        .filter(|sign| {
            sign.composition
                .as_ref()
                .is_some_and(|c| matches_within(c, target, &Tolerance::ZERO))
        })
        .collect()
}

/// Signs whose total stroke count lies in `min..=max`.
pub fn by_stroke_count(catalog: &SignCatalog, min: u32, max: u32) -> Vec<&Sign> {
    catalog
        .signs()
        .iter()
        .filter(|sign| {
            sign.composition
                .as_ref()
                .is_some_and(|c| (min..=max).contains(&c.total()))
        })
        .collect()
}

/// Group catalog signs by total stroke count, in ascending count order.
pub fn group_by_stroke_count(catalog: &SignCatalog) -> BTreeMap<u32, Vec<&Sign>> {
    let mut groups: BTreeMap<u32, Vec<&Sign>> = BTreeMap::new();
    for sign in catalog.signs() {
        if let Some(composition) = &sign.composition {
            groups.entry(composition.total()).or_default().push(sign);
        }
    }
    groups
}
