//! Classification labels attached to an [`Outcome`](crate::Outcome) and the
//! filter used to route reactive callbacks by those labels.

use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered list of tags carried by an outcome.
///
/// Insertion order is preserved and duplicates are allowed. Inline storage
/// covers the common case of one or two tags without allocating.
pub type Tags = SmallVec<[Tag; 2]>;

/// A classification label such as `"not_found"` or `"validation"`.
///
/// Tags route reactive callbacks without inspecting the payload. Static
/// labels are stored borrowed; runtime labels are owned.
///
/// # Examples
///
/// ```
/// use outcome_rail::Tag;
///
/// let tag = Tag::new("not_found");
/// assert_eq!(tag, "not_found");
/// assert_eq!(tag.to_string(), "not_found");
///
/// let dynamic = Tag::from(format!("http_{}", 404));
/// assert_eq!(dynamic.as_str(), "http_404");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// Creates a tag from a static label without allocating.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a tag that owns its label.
    #[inline]
    pub fn owned<S: Into<String>>(name: S) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the label.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Tag {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for Tag {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Tag {
    #[inline]
    fn from(name: String) -> Self {
        Self::owned(name)
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Selects which tagged outcomes a reactive callback reacts to.
///
/// A filter matches when it names no targets, when it is marked
/// [`unhandled`](TagFilter::unhandled), or when at least one target is among
/// the outcome's tags.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Tag, TagFilter};
///
/// let types = [Tag::new("a"), Tag::new("b")];
///
/// assert!(TagFilter::any().matches(&types));
/// assert!(TagFilter::from(["c", "b"]).matches(&types));
/// assert!(!TagFilter::from("c").matches(&types));
/// assert!(TagFilter::from("c").unhandled().matches(&types));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagFilter {
    targets: Tags,
    unhandled: bool,
}

impl TagFilter {
    /// A filter with no targets; matches every outcome of the right kind.
    #[inline]
    pub fn any() -> Self {
        Self::default()
    }

    /// A filter matching outcomes carrying at least one of `targets`.
    pub fn of<I, T>(targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        Self { targets: targets.into_iter().map(Into::into).collect(), unhandled: false }
    }

    /// Makes the filter match regardless of the outcome's tags.
    #[inline]
    pub fn unhandled(mut self) -> Self {
        self.unhandled = true;
        self
    }

    /// The requested tags, in the order they were given.
    #[inline]
    pub fn targets(&self) -> &[Tag] {
        &self.targets
    }

    /// Whether the filter ignores tags entirely.
    #[inline]
    pub fn is_unhandled(&self) -> bool {
        self.unhandled
    }

    /// Applies the matching rule to an outcome's tags.
    pub fn matches(&self, types: &[Tag]) -> bool {
        self.targets.is_empty()
            || self.unhandled
            || self.targets.iter().any(|target| types.contains(target))
    }

    /// The tags of `types` selected by this filter.
    ///
    /// With no targets this is `types` itself. Otherwise it is the
    /// intersection in target order, without duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Tag, TagFilter};
    ///
    /// let types = [Tag::new("a"), Tag::new("b"), Tag::new("c")];
    /// let subset = TagFilter::from(["c", "x", "a", "c"]).matched_subset(&types);
    ///
    /// assert_eq!(subset.as_slice(), &[&Tag::new("c"), &Tag::new("a")]);
    /// ```
    pub fn matched_subset<'a>(&self, types: &'a [Tag]) -> SmallVec<[&'a Tag; 2]> {
        if self.targets.is_empty() {
            return types.iter().collect();
        }

        let mut subset: SmallVec<[&'a Tag; 2]> = SmallVec::new();
        for target in &self.targets {
            if let Some(found) = types.iter().find(|tag| *tag == target) {
                if !subset.contains(&found) {
                    subset.push(found);
                }
            }
        }
        subset
    }

    /// First tag of the matched subset; the tag handed to a firing callback.
    pub fn matched<'a>(&self, types: &'a [Tag]) -> Option<&'a Tag> {
        if self.targets.is_empty() {
            return types.first();
        }
        self.targets
            .iter()
            .find_map(|target| types.iter().find(|tag| *tag == target))
    }
}

impl From<Tag> for TagFilter {
    fn from(tag: Tag) -> Self {
        Self::of([tag])
    }
}

impl From<&'static str> for TagFilter {
    fn from(tag: &'static str) -> Self {
        Self::of([tag])
    }
}

impl<const N: usize> From<[&'static str; N]> for TagFilter {
    fn from(tags: [&'static str; N]) -> Self {
        Self::of(tags)
    }
}

impl<const N: usize> From<[Tag; N]> for TagFilter {
    fn from(tags: [Tag; N]) -> Self {
        Self::of(tags)
    }
}

impl From<&[Tag]> for TagFilter {
    fn from(tags: &[Tag]) -> Self {
        Self::of(tags.iter().cloned())
    }
}

impl From<Tags> for TagFilter {
    fn from(targets: Tags) -> Self {
        Self { targets, unhandled: false }
    }
}
