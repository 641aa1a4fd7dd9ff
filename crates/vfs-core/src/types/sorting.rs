//! Sorting types for listing operations.
//!
//! A [`SortSpec`] carries at most one sort key (by name or by creation
//! time) plus a direction, and sorts any slice of [`Sortable`] entries
//! in place. When no key is given, listings default to name ascending.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::VfsError;
use crate::result::VfsResult;

/// Direction of a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

/// An entry that listings can order.
pub trait Sortable {
    /// The name compared when sorting by name.
    fn sort_name(&self) -> &str;

    /// The creation time compared when sorting by creation time.
    fn sort_created_at(&self) -> DateTime<Utc>;
}

/// Sort selection for a listing operation.
///
/// At most one of the two keys may be set. [`SortSpec::validate`] enforces
/// this for callers that build a selection from external input.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SortSpec {
    /// Sort by entry name.
    pub by_name: Option<SortDirection>,
    /// Sort by creation time.
    pub by_created: Option<SortDirection>,
}

impl SortSpec {
    /// Create a spec sorting by name in the given direction.
    pub fn name(direction: SortDirection) -> Self {
        Self {
            by_name: Some(direction),
            by_created: None,
        }
    }

    /// Create a spec sorting by creation time in the given direction.
    pub fn created(direction: SortDirection) -> Self {
        Self {
            by_name: None,
            by_created: Some(direction),
        }
    }

    /// Reject specs that set both sort keys.
    pub fn validate(&self) -> VfsResult<()> {
        if self.by_name.is_some() && self.by_created.is_some() {
            return Err(VfsError::configuration("At most one sort key may be set"));
        }
        Ok(())
    }

    /// Sort entries in place according to this spec.
    ///
    /// Creation-time keys compare at whole-second granularity, so
    /// entries created within the same second tie. Sorting is stable;
    /// tied entries keep their original relative order.
    pub fn sort<T: Sortable>(&self, entries: &mut [T]) {
        match (self.by_name, self.by_created) {
            (None, Some(direction)) => {
                entries.sort_by(|a, b| {
                    let a_seconds = a.sort_created_at().timestamp();
                    let b_seconds = b.sort_created_at().timestamp();
                    directed(a_seconds.cmp(&b_seconds), direction)
                });
            }
            _ => {
                let direction = self.by_name.unwrap_or_default();
                entries.sort_by(|a, b| directed(a.sort_name().cmp(b.sort_name()), direction));
            }
        }
    }
}

fn directed(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}
