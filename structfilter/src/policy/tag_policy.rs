//! Keep/remove policies over tag labels.

use std::collections::{BTreeMap, HashMap};

/// The tag key used by projection and redaction.
pub const FILTER_TAG: &str = "filter";

// =============================================================================
// TagPolicy - tag key -> acceptable labels
// =============================================================================

/// A mapping from tag key to a list of labels.
///
/// Used on its own for "keep" classification, or as either half of a
/// [`Policy`]. A key mapped to an empty list matches no field.
///
/// ```rust
/// use structfilter::TagPolicy;
///
/// let policy = TagPolicy::filter(["public"]).with("audit", ["pii", ""]);
/// assert_eq!(policy.labels("filter"), Some(&["public".to_string()][..]));
/// assert_eq!(policy.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagPolicy {
    labels: BTreeMap<String, Vec<String>>,
}

impl TagPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy on the `filter` tag key.
    pub fn filter<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().with(FILTER_TAG, labels)
    }

    /// Adds `labels` under `key`, extending any labels already present.
    #[must_use]
    pub fn with<K, I, S>(mut self, key: K, labels: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(key, labels);
        self
    }

    /// Adds `labels` under `key`, extending any labels already present.
    pub fn insert<K, I, S>(&mut self, key: K, labels: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels
            .entry(key.into())
            .or_default()
            .extend(labels.into_iter().map(Into::into));
    }

    pub fn labels(&self, key: &str) -> Option<&[String]> {
        self.labels.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.labels
            .iter()
            .map(|(key, labels)| (key.as_str(), labels.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K, I, S> FromIterator<(K, I)> for TagPolicy
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut policy = Self::new();
        for (key, labels) in iter {
            policy.insert(key, labels);
        }
        policy
    }
}

impl From<BTreeMap<String, Vec<String>>> for TagPolicy {
    fn from(labels: BTreeMap<String, Vec<String>>) -> Self {
        Self { labels }
    }
}

impl From<HashMap<String, Vec<String>>> for TagPolicy {
    fn from(labels: HashMap<String, Vec<String>>) -> Self {
        Self {
            labels: labels.into_iter().collect(),
        }
    }
}

// =============================================================================
// Policy - keep and remove halves
// =============================================================================

/// A keep/remove pair.
///
/// A field is selected when it satisfies `keep` and does not satisfy `remove`.
///
/// ```rust
/// use structfilter::Policy;
///
/// // Everything without a filter tag, minus admin fields.
/// let policy = Policy::keeping([""]).removing(["admin"]);
/// assert!(!policy.remove().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    keep: TagPolicy,
    remove: TagPolicy,
}

impl Policy {
    pub fn new(keep: TagPolicy, remove: TagPolicy) -> Self {
        Self { keep, remove }
    }

    /// Keeps fields whose `filter` tag carries any of `labels`.
    pub fn keeping<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(TagPolicy::filter(labels), TagPolicy::new())
    }

    /// Additionally drops fields whose `filter` tag carries any of `labels`.
    #[must_use]
    pub fn removing<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove.insert(FILTER_TAG, labels);
        self
    }

    pub fn keep(&self) -> &TagPolicy {
        &self.keep
    }

    pub fn remove(&self) -> &TagPolicy {
        &self.remove
    }
}

impl From<TagPolicy> for Policy {
    fn from(keep: TagPolicy) -> Self {
        Self::new(keep, TagPolicy::new())
    }
}
