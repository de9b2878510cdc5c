//! Trait Selection Guard
//!
//! Enforces the "pick at most N traits" rule. The guard owns the selection
//! set, so the count can never drift from the actual checked state; each
//! change event is an O(1) update. Once the limit is reached every *other*
//! unchecked trait input reports disabled, while checked inputs stay enabled
//! so a slot can always be freed.

use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct TraitGuard {
    limit: usize,
    selected: HashSet<String>,
}

impl TraitGuard {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            selected: HashSet::new(),
        }
    }

    /// Initialize from inputs that are already checked when the form loads.
    pub fn with_selected<I, S>(limit: usize, checked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            limit,
            selected: checked.into_iter().map(Into::into).collect(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Apply one change event. Returns whether the state actually changed;
    /// a repeated event for an already-matching state is a no-op, which
    /// keeps the count exact no matter what the event source does.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        if checked {
            self.selected.insert(id.to_string())
        } else {
            self.selected.remove(id)
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn checked_count(&self) -> usize {
        self.selected.len()
    }

    pub fn at_limit(&self) -> bool {
        self.selected.len() >= self.limit
    }

    /// Whether the given trait input should be disabled right now. Only
    /// unchecked inputs are ever disabled.
    pub fn is_disabled(&self, id: &str) -> bool {
        !self.is_checked(id) && self.at_limit()
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}
