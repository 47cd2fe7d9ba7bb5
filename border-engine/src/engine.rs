use crate::border::{Border, CountryPolygon};
use crate::errors::BorderError;
use std::collections::BTreeMap;

/// Deepest drill-down level. At this prefix length polygons are never
/// rendered; the display always falls back to individual points.
pub const MAX_PREFIX_LENGTH: usize = 3;

/// Runs the border aggregation pipeline: seed, filter, group, merge, and
/// the qualified-majority visibility decision.
///
/// The engine holds the one piece of configuration the pipeline needs, the
/// qualified majority threshold, validated once at construction.
#[derive(Debug, Clone)]
pub struct BorderEngine {
    qualified_majority: f64,
}

impl BorderEngine {
    /// Creates an engine with the given qualified majority threshold.
    ///
    /// # Parameters
    /// - `qualified_majority`: Minimum fraction of a merged region's airports
    ///   that must share the dominant prefix for its polygon to be rendered.
    ///
    /// # Errors
    /// - `BorderError::InvalidThreshold` - If the threshold is outside (0, 1).
    pub fn new(qualified_majority: f64) -> Result<Self, BorderError> {
        if !(qualified_majority > 0.0 && qualified_majority < 1.0) {
            return Err(BorderError::InvalidThreshold(qualified_majority));
        }
        Ok(BorderEngine { qualified_majority })
    }

    pub fn qualified_majority(&self) -> f64 {
        self.qualified_majority
    }

    /// Aggregates country polygons into merged borders keyed by dominant
    /// prefix, at drill-down level `filter.len() + 1`.
    ///
    /// Each polygon becomes a singleton border; borders whose dominant
    /// prefix does not extend `filter` are dropped; the survivors are
    /// grouped by dominant prefix and each group is left-folded into one
    /// border in input order. Because a merged border derives its dominant
    /// prefix from the combined counts, the final key may differ from the
    /// group's; colliding results are merged again so the output map is
    /// keyed purely by final dominant prefix.
    ///
    /// # Errors
    /// - `BorderError::EmptyBorder` - If a polygon with no airport codes
    ///   reached the engine (precondition violation, halts the pass).
    /// - `BorderError::Prefix` - If a code is shorter than the prefix length.
    pub fn aggregate(
        &self,
        polygons: &[CountryPolygon],
        filter: &str,
    ) -> Result<BTreeMap<String, Border>, BorderError> {
        let prefix_length = filter.len() + 1;

        let mut buckets: BTreeMap<String, Vec<Border>> = BTreeMap::new();
        for polygon in polygons {
            let border = Border::seed(polygon.clone(), prefix_length)?;
            if !border.dominant_prefix().starts_with(filter) {
                continue;
            }
            buckets
                .entry(border.dominant_prefix().to_string())
                .or_default()
                .push(border);
        }

        let mut merged: BTreeMap<String, Border> = BTreeMap::new();
        for (_, bucket) in buckets {
            let mut members = bucket.into_iter();
            if let Some(first) = members.next() {
                let mut folded = members.try_fold(first, Border::merge)?;
                // Re-keying by the re-derived dominant can collide with an
                // already merged border; fold those together as well.
                loop {
                    match merged.remove(folded.dominant_prefix()) {
                        Some(existing) => folded = existing.merge(folded)?,
                        None => {
                            merged.insert(folded.dominant_prefix().to_string(), folded);
                            break;
                        }
                    }
                }
            }
        }
        Ok(merged)
    }

    /// Decides whether a merged border is visually trustworthy enough to be
    /// rendered as a filled polygon.
    ///
    /// At the deepest drill-down level this is always false. Otherwise the
    /// polygon is shown iff the fraction of contained airports sharing the
    /// dominant prefix strictly exceeds the qualified majority.
    pub fn should_show_polygon(&self, border: &Border) -> bool {
        if border.dominant_prefix().len() >= MAX_PREFIX_LENGTH {
            return false;
        }
        let total = border.total_airports();
        let minority = border.minority_codes().len();
        // total >= 1 always: borders are only ever built from non-empty
        // code sets.
        let majority_ratio = (total - minority) as f64 / total as f64;
        majority_ratio > self.qualified_majority
    }
}
