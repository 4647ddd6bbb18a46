//! Column value normalization for the filtering UI.
//!
//! Independent of the windowing engine: takes the raw values of one column,
//! deduplicates and sorts them for display in a filter dropdown, and
//! intersects them with the currently selected values. Empty cells and the
//! `N/A` marker sort to the front of the list.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A raw column value as the filtering UI sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Empty cell (`null`/blank upstream values normalize to this)
    Empty,
    /// Numeric cell value
    Number(f64),
    /// Text cell value
    Text(String),
}

impl FilterValue {
    /// Display form shown in the filter dropdown. Empty cells render as the
    /// caller-supplied placeholder in parentheses, e.g. `(Blank cells)`.
    #[must_use]
    pub fn visual_value(&self, empty_label: &str) -> String {
        match self {
            Self::Empty => format!("({empty_label})"),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    fn is_na(&self) -> bool {
        matches!(self, Self::Text(s) if s == "N/A")
    }

    fn dedupe_key(&self) -> DedupeKey {
        match self {
            Self::Empty => DedupeKey::Empty,
            Self::Number(n) => {
                // Fold -0.0 into 0.0 so the two dedupe together
                let bits = n.to_bits();
                let bits = if bits == (-0.0_f64).to_bits() { 0 } else { bits };
                DedupeKey::Number(bits)
            }
            Self::Text(s) => DedupeKey::Text(s.clone()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
enum DedupeKey {
    Empty,
    Number(u64),
    Text(String),
}

/// One entry of the filter dropdown after intersecting with the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterItem {
    /// Whether the value is currently selected
    pub checked: bool,
    /// The underlying value
    pub value: FilterValue,
    /// Display form of the value
    pub visual_value: String,
}

/// Comparison used for sorting filter values: numeric for number pairs,
/// case-insensitive lexicographic otherwise (empties sort first).
///
/// Pairwise helper only. Mixed number/text slices must pick one strategy
/// for the whole slice (see [`unify_values`]): this comparator is not
/// transitive across types (`2 < 10` numerically, `"10" < "15" < "2"`
/// lexicographically).
#[must_use]
pub fn sort_comparison(a: &FilterValue, b: &FilterValue) -> Ordering {
    match (a, b) {
        (FilterValue::Number(x), FilterValue::Number(y)) => x.total_cmp(y),
        (FilterValue::Empty, FilterValue::Empty) => Ordering::Equal,
        (FilterValue::Empty, _) => Ordering::Less,
        (_, FilterValue::Empty) => Ordering::Greater,
        _ => lexicographic(a, b),
    }
}

fn lexicographic(a: &FilterValue, b: &FilterValue) -> Ordering {
    let a = a.visual_value("").to_lowercase();
    let b = b.visual_value("").to_lowercase();
    a.cmp(&b)
}

/// Unify column values: deduplicate, sort, and float the `N/A` and empty
/// markers to the front of the list in that order.
///
/// One sort strategy applies to the whole list: numeric when every
/// remaining value is a number, case-insensitive lexicographic otherwise.
/// The output is therefore deterministic regardless of input order.
#[must_use]
pub fn unify_values(values: &[FilterValue]) -> Vec<FilterValue> {
    let mut seen = HashSet::new();
    let mut unified: Vec<FilterValue> = values
        .iter()
        .filter(|v| seen.insert(v.dedupe_key()))
        .cloned()
        .collect();

    let has_na = unified.iter().any(FilterValue::is_na);
    let has_empty = unified.iter().any(|v| matches!(v, FilterValue::Empty));
    unified.retain(|v| !v.is_na() && !matches!(v, FilterValue::Empty));

    let all_numbers = unified.iter().all(|v| matches!(v, FilterValue::Number(_)));
    if all_numbers {
        // sort_comparison is numeric for number pairs
        unified.sort_by(sort_comparison);
    } else {
        unified.sort_by(lexicographic);
    }

    if has_empty {
        unified.insert(0, FilterValue::Empty);
    }
    if has_na {
        unified.insert(0, FilterValue::Text("N/A".to_string()));
    }
    unified
}

/// Intersect the base (all distinct) values with the selected ones,
/// producing the dropdown entries. When `base` and `selected` are the same
/// slice, everything is checked without building a lookup set.
#[must_use]
pub fn intersect_values(
    base: &[FilterValue],
    selected: &[FilterValue],
    empty_label: &str,
) -> Vec<FilterItem> {
    let same = std::ptr::eq(base, selected);
    let selection: Option<HashSet<DedupeKey>> = if same {
        None
    } else {
        Some(selected.iter().map(FilterValue::dedupe_key).collect())
    };

    base.iter()
        .map(|value| {
            let checked = match &selection {
                None => true,
                Some(set) => set.contains(&value.dedupe_key()),
            };
            FilterItem {
                checked,
                value: value.clone(),
                visual_value: value.visual_value(empty_label),
            }
        })
        .collect()
}
