use errors::PrefixError;
use std::collections::BTreeMap;
use std::fmt;
pub mod errors;

/// Frequency table of code prefixes at a fixed length.
///
/// Counts how many codes of some subset start with each prefix. Backed by a
/// `BTreeMap` so iteration order is deterministic, which makes the dominant
/// prefix tie-break well-defined: among prefixes with equal counts the
/// lexicographically smallest one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixCount {
    counts: BTreeMap<String, usize>,
}

impl PrefixCount {
    /// Creates a new, empty `PrefixCount`.
    ///
    /// # Returns
    /// * `PrefixCount` - An instance of `PrefixCount` with no prefixes initially.
    pub fn new() -> Self {
        PrefixCount {
            counts: BTreeMap::new(),
        }
    }

    /// Tallies the given codes by their prefix of the given length, in a
    /// single pass over the input.
    ///
    /// # Parameters
    /// - `codes`: The codes to tally.
    /// - `length`: The prefix length to tally at.
    ///
    /// # Returns
    /// * `Result<PrefixCount, PrefixError>` - The frequency table of prefixes.
    ///
    /// # Errors
    /// - `PrefixError::CodeTooShort` - If any code is shorter than `length`.
    pub fn from_codes<'a, I>(codes: I, length: usize) -> Result<Self, PrefixError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = BTreeMap::new();
        for code in codes {
            let prefix = prefix_of(code, length)?;
            *counts.entry(prefix.to_string()).or_insert(0) += 1;
        }
        Ok(PrefixCount { counts })
    }

    /// Returns the prefix with the highest count.
    ///
    /// Ties are broken towards the lexicographically smallest prefix.
    ///
    /// # Returns
    /// * `Option<&str>` - The dominant prefix, or `None` if the table is
    ///   empty. Callers aggregating borders treat `None` as an invariant
    ///   violation, since a border is never built from an empty code set.
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (prefix, &count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((prefix, count)),
            }
        }
        best.map(|(prefix, _)| prefix)
    }

    /// Pointwise-adds two frequency tables over the union of their prefixes.
    ///
    /// The operation is associative and commutative, so the order in which
    /// borders are merged does not affect the result.
    ///
    /// # Parameters
    /// - `other`: The table to add to this one.
    ///
    /// # Returns
    /// * `PrefixCount` - A new table holding the summed counts.
    pub fn merge(&self, other: &PrefixCount) -> PrefixCount {
        let mut counts = self.counts.clone();
        for (prefix, count) in &other.counts {
            *counts.entry(prefix.clone()).or_insert(0) += count;
        }
        PrefixCount { counts }
    }

    /// Returns the count recorded for `prefix`, or 0 if absent.
    pub fn get(&self, prefix: &str) -> usize {
        self.counts.get(prefix).copied().unwrap_or(0)
    }

    /// Returns the sum of all counts, i.e. the size of the tallied subset.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns the number of distinct prefixes in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(prefix, count)` pairs in lexicographic prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(prefix, &count)| (prefix.as_str(), count))
    }
}

impl fmt::Display for PrefixCount {
    /// Formats the table as `prefix:count` pairs, e.g. `"E:1 L:2"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .counts
            .iter()
            .map(|(prefix, count)| format!("{}:{}", prefix, count))
            .collect();
        write!(f, "{}", pairs.join(" "))
    }
}

/// Returns the first `length` characters of `code`.
///
/// # Parameters
/// - `code`: The code to slice.
/// - `length`: The number of leading characters to take.
///
/// # Returns
/// * `Result<&str, PrefixError>` - The prefix on success.
///
/// # Errors
/// - `PrefixError::CodeTooShort` - If `code` has fewer than `length` characters.
pub fn prefix_of(code: &str, length: usize) -> Result<&str, PrefixError> {
    code.get(..length).ok_or_else(|| PrefixError::CodeTooShort {
        code: code.to_string(),
        length,
    })
}

/// Tallies the given codes by prefix. Convenience wrapper around
/// [`PrefixCount::from_codes`].
pub fn count_by_prefix<'a, I>(codes: I, length: usize) -> Result<PrefixCount, PrefixError>
where
    I: IntoIterator<Item = &'a str>,
{
    PrefixCount::from_codes(codes, length)
}

/// Partitions the given codes into groups sharing a prefix of the given
/// length. Within each group the input order is preserved.
///
/// # Parameters
/// - `codes`: The codes to partition.
/// - `length`: The prefix length to partition at.
///
/// # Returns
/// * `Result<BTreeMap<String, Vec<String>>, PrefixError>` - A mapping from
///   prefix to the codes that start with it.
///
/// # Errors
/// - `PrefixError::CodeTooShort` - If any code is shorter than `length`.
pub fn group_by_prefix<'a, I>(
    codes: I,
    length: usize,
) -> Result<BTreeMap<String, Vec<String>>, PrefixError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for code in codes {
        let prefix = prefix_of(code, length)?;
        groups
            .entry(prefix.to_string())
            .or_default()
            .push(code.to_string());
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: [&str; 6] = ["LFPG", "LFPO", "LEMD", "EDDF", "EGLL", "KJFK"];

    #[test]
    fn test_prefix_of_returns_leading_characters() {
        assert_eq!(prefix_of("LFPG", 1).unwrap(), "L");
        assert_eq!(prefix_of("LFPG", 2).unwrap(), "LF");
        assert_eq!(prefix_of("LFPG", 3).unwrap(), "LFP");
    }

    #[test]
    fn test_prefix_of_rejects_short_codes() {
        let result = prefix_of("LF", 3);
        assert_eq!(
            result,
            Err(PrefixError::CodeTooShort {
                code: "LF".to_string(),
                length: 3
            })
        );
    }

    #[test]
    fn test_count_partition_sums_to_cardinality() {
        for length in 1..=3 {
            let counts = count_by_prefix(CODES.iter().copied(), length).unwrap();
            assert_eq!(
                counts.total(),
                CODES.len(),
                "Counts at length {} must sum to the number of codes",
                length
            );
        }
    }

    #[test]
    fn test_count_by_prefix_tallies_occurrences() {
        let counts = count_by_prefix(CODES.iter().copied(), 1).unwrap();
        assert_eq!(counts.get("L"), 3);
        assert_eq!(counts.get("E"), 2);
        assert_eq!(counts.get("K"), 1);
        assert_eq!(counts.get("S"), 0);
    }

    #[test]
    fn test_dominant_of_homogeneous_set() {
        let codes = ["LFPG", "LFPO", "LFBO"];
        let counts = count_by_prefix(codes.iter().copied(), 2).unwrap();
        assert_eq!(counts.dominant(), Some("LF"));
        assert_eq!(counts.get("LF"), codes.len());
    }

    #[test]
    fn test_dominant_of_empty_counts_is_none() {
        assert_eq!(PrefixCount::new().dominant(), None);
    }

    #[test]
    fn test_dominant_tie_breaks_to_smallest_prefix() {
        let codes = ["EDDF", "LFPG", "LFPO", "EGLL"];
        let counts = count_by_prefix(codes.iter().copied(), 1).unwrap();
        // Two codes under E, two under L: the tie goes to E.
        assert_eq!(counts.dominant(), Some("E"));
    }

    #[test]
    fn test_merge_is_commutative() {
        let a = count_by_prefix(["LFPG", "EDDF"].iter().copied(), 1).unwrap();
        let b = count_by_prefix(["LFPO", "KJFK"].iter().copied(), 1).unwrap();
        assert_eq!(a.merge(&b), b.merge(&a));
    }

    #[test]
    fn test_merge_is_associative() {
        let a = count_by_prefix(["LFPG", "EDDF"].iter().copied(), 1).unwrap();
        let b = count_by_prefix(["LFPO"].iter().copied(), 1).unwrap();
        let c = count_by_prefix(["KJFK", "LEMD"].iter().copied(), 1).unwrap();
        assert_eq!(a.merge(&b).merge(&c), a.merge(&b.merge(&c)));
    }

    #[test]
    fn test_merge_adds_counts_pointwise() {
        let a = count_by_prefix(["LFPG", "LFPO"].iter().copied(), 1).unwrap();
        let b = count_by_prefix(["LEMD", "EDDF"].iter().copied(), 1).unwrap();
        let merged = a.merge(&b);
        assert_eq!(merged.get("L"), 3);
        assert_eq!(merged.get("E"), 1);
        assert_eq!(merged.total(), 4);
    }

    #[test]
    fn test_group_by_prefix_partitions_codes() {
        let groups = group_by_prefix(CODES.iter().copied(), 1).unwrap();
        assert_eq!(
            groups.get("L"),
            Some(&vec![
                "LFPG".to_string(),
                "LFPO".to_string(),
                "LEMD".to_string()
            ])
        );
        assert_eq!(
            groups.get("E"),
            Some(&vec!["EDDF".to_string(), "EGLL".to_string()])
        );
    }

    #[test]
    fn test_group_then_flatten_reproduces_the_multiset() {
        let groups = group_by_prefix(CODES.iter().copied(), 2).unwrap();
        let mut flattened: Vec<String> = groups.into_values().flatten().collect();
        flattened.sort();
        let mut expected: Vec<String> = CODES.iter().map(|c| c.to_string()).collect();
        expected.sort();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn test_display_formats_sorted_pairs() {
        let counts = count_by_prefix(["LFPG", "LFPO", "EDDF"].iter().copied(), 1).unwrap();
        assert_eq!(format!("{}", counts), "E:1 L:2");
    }
}
