//! Approved vessel reference list

/// Ordered list of approved vessel names
///
/// Lookups compare names after trimming surrounding whitespace and
/// lowercasing, on both the candidate and every entry. Duplicate entries are
/// kept and do not affect matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovedVessels {
    names: Vec<String>,
    normalized: Vec<String>,
}

impl ApprovedVessels {
    /// Build the list from names in their original spelling
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let normalized = names.iter().map(|n| normalize(n)).collect();
        Self { names, normalized }
    }

    /// Whether `candidate` matches an approved name
    pub fn contains(&self, candidate: &str) -> bool {
        let candidate = normalize(candidate);
        self.normalized.iter().any(|n| *n == candidate)
    }

    /// Names as supplied, in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of entries (duplicates included)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Trim and case-fold a vessel name
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
