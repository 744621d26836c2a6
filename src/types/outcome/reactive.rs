use super::{Outcome, Variant};
use crate::macros::rail_trace;
use crate::types::{Tag, TagFilter};

impl<T, E> Outcome<T, E> {
    /// Runs `callback` if this is an unhandled success matching `filter`.
    ///
    /// The callback receives the value and the first matched tag. Once any
    /// reactive callback has fired the outcome is handled, and this call is a
    /// no-op. Chaining several calls therefore builds a prioritized match
    /// list where the first matching clause wins. Always returns `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{tags, Outcome};
    ///
    /// let mut hits = Vec::new();
    /// Outcome::<_, ()>::success_with(10, ["cached"])
    ///     .on_success(tags!["fresh"], |v, _| hits.push(("fresh", *v)))
    ///     .on_success(tags!["cached"], |v, _| hits.push(("cached", *v)))
    ///     .on_success(tags![], |v, _| hits.push(("any", *v)));
    ///
    /// assert_eq!(hits, [("cached", 10)]);
    /// ```
    pub fn on_success<P, F>(&self, filter: P, callback: F) -> &Self
    where
        P: Into<TagFilter>,
        F: FnOnce(&T, Option<&Tag>),
    {
        if let Variant::Success(value) = &self.variant {
            if let Some(tag) = self.claim(&filter.into()) {
                rail_trace!(kind = "success", tag = ?tag, "reactive callback fired");
                callback(value, tag);
            }
        }
        self
    }

    /// Runs `callback` if this is an unhandled failure matching `filter`.
    ///
    /// Mirrors [`on_success`](Outcome::on_success).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{tags, Outcome};
    ///
    /// let mut routed = None;
    /// Outcome::<(), _>::failure_with("denied", ["auth", "audit"])
    ///     .on_failure(tags!["db"], |_, _| routed = Some("db".to_string()))
    ///     .on_failure(tags!["audit", "auth"], |_, tag| routed = tag.map(|t| t.to_string()));
    ///
    /// assert_eq!(routed.as_deref(), Some("audit"));
    /// ```
    pub fn on_failure<P, F>(&self, filter: P, callback: F) -> &Self
    where
        P: Into<TagFilter>,
        F: FnOnce(&E, Option<&Tag>),
    {
        if let Variant::Failure(error) = &self.variant {
            if let Some(tag) = self.claim(&filter.into()) {
                rail_trace!(kind = "failure", tag = ?tag, "reactive callback fired");
                callback(error, tag);
            }
        }
        self
    }

    /// `on_success` with a filter that matches every success.
    #[inline]
    pub fn on_any_success<F>(&self, callback: F) -> &Self
    where
        F: FnOnce(&T, Option<&Tag>),
    {
        self.on_success(TagFilter::any(), callback)
    }

    /// `on_failure` with a filter that matches every failure.
    #[inline]
    pub fn on_any_failure<F>(&self, callback: F) -> &Self
    where
        F: FnOnce(&E, Option<&Tag>),
    {
        self.on_failure(TagFilter::any(), callback)
    }

    /// Marks the outcome handled if `filter` matches and nothing fired yet.
    ///
    /// The flag is set before the callback runs, so a reactive call made from
    /// inside the callback sees the outcome as handled.
    fn claim(&self, filter: &TagFilter) -> Option<Option<&Tag>> {
        if self.handled.get() || !filter.matches(&self.types) {
            return None;
        }
        self.handled.set(true);
        Some(filter.matched(&self.types))
    }
}
