//! Maximum-of-sequence
//!
//! One left-to-right pass. The running maximum is replaced only on a
//! strict increase, so among equal maxima the earliest element wins.
//!
//! Empty input yields `0` by default. That mirrors the behaviour this
//! benchmark has always had; [`EmptyInputPolicy::Error`] turns it into
//! [`Error::EmptyInput`] for callers who would rather know.

use crate::error::{Error, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// What `max_of` returns for an empty sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyInputPolicy {
    /// Return `Int(0)`
    #[default]
    Zero,
    /// Return [`Error::EmptyInput`]
    Error,
}

/// Single-pass scan shared by every max entry point.
///
/// `cmp(candidate, best)` orders a candidate against the running maximum;
/// `Ok(None)` from it means the pair is incomparable and aborts the scan
/// with [`Error::Unorderable`]. Returns the index and element of the first
/// maximum, or `None` for an empty slice.
pub fn scan_max<T, F>(items: &[T], mut cmp: F) -> Result<Option<(usize, &T)>>
where
    F: FnMut(usize, &T, &T) -> Result<Option<Ordering>>,
{
    let mut iter = items.iter().enumerate();
    let Some(mut best) = iter.next() else {
        return Ok(None);
    };

    for (index, item) in iter {
        match cmp(index, item, best.1)? {
            Some(Ordering::Greater) => best = (index, item),
            Some(_) => {}
            None => return Err(Error::Unorderable { index }),
        }
    }

    Ok(Some(best))
}

/// Maximum of a sequence of values, `Int(0)` when empty
pub fn max_of(values: &[Value]) -> Result<Value> {
    max_of_with(values, EmptyInputPolicy::Zero)
}

/// Maximum of a sequence of values with an explicit empty-input policy
pub fn max_of_with(values: &[Value], policy: EmptyInputPolicy) -> Result<Value> {
    Ok(max_entry(values, policy)?.map_or(Value::Int(0), |(_, v)| v.clone()))
}

/// Index of the first maximum, `None` when empty under the `Zero` policy
pub fn max_index_of(values: &[Value], policy: EmptyInputPolicy) -> Result<Option<usize>> {
    Ok(max_entry(values, policy)?.map(|(i, _)| i))
}

fn max_entry(values: &[Value], policy: EmptyInputPolicy) -> Result<Option<(usize, &Value)>> {
    if values.is_empty() {
        debug!(?policy, "max_of on empty input");
        return match policy {
            EmptyInputPolicy::Zero => Ok(None),
            EmptyInputPolicy::Error => Err(Error::EmptyInput),
        };
    }

    // The first element never meets the comparator, so check it up front
    check_number(0, &values[0])?;

    let found = scan_max(values, |index, candidate, best| {
        check_number(index, candidate)?;
        Ok(candidate.cmp_numeric(best))
    })?;

    if let Some((index, value)) = found {
        debug!(len = values.len(), index, %value, "max_of scan complete");
    }
    Ok(found)
}

fn check_number(index: usize, value: &Value) -> Result<()> {
    match value {
        Value::Int(_) => Ok(()),
        Value::Float(f) if f.is_nan() => Err(Error::Unorderable { index }),
        Value::Float(_) => Ok(()),
        other => Err(Error::WrongType {
            index,
            expected: "number",
            actual: other.type_name(),
        }),
    }
}

/// Typed fast path for plain numbers.
///
/// Returns `T::default()` (zero for every primitive number) when empty.
/// Incomparable elements such as NaN never compare greater, so they are
/// passed over rather than reported; a leading NaN is kept because
/// nothing compares greater than it either.
pub fn max_or_zero<T>(items: &[T]) -> T
where
    T: PartialOrd + Copy + Default,
{
    let mut iter = items.iter();
    let Some(&first) = iter.next() else {
        return T::default();
    };
    let mut best = first;
    for &item in iter {
        if item > best {
            best = item;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(max_of(&[]).unwrap(), Value::Int(0));
    }

    #[test]
    fn test_empty_strict_policy() {
        assert_eq!(
            max_of_with(&[], EmptyInputPolicy::Error),
            Err(Error::EmptyInput)
        );
    }

    #[test]
    fn test_single_element() {
        assert_eq!(max_of(&ints(&[5])).unwrap(), Value::Int(5));
    }

    #[test]
    fn test_known_sequence() {
        assert_eq!(
            max_of(&ints(&[3, 1, 4, 1, 5, 9, 2, 6])).unwrap(),
            Value::Int(9)
        );
    }

    #[test]
    fn test_all_negative() {
        assert_eq!(max_of(&ints(&[-7, -3, -9])).unwrap(), Value::Int(-3));
    }

    #[test]
    fn test_mixed_int_float() {
        let values = vec![Value::Int(2), Value::Float(2.5), Value::Int(1)];
        assert_eq!(max_of(&values).unwrap(), Value::Float(2.5));
    }

    #[test]
    fn test_ties_keep_earliest() {
        // Int(3) and Float(3.0) compare equal; the first one stays
        let values = vec![Value::Int(1), Value::Int(3), Value::Float(3.0)];
        assert_eq!(max_index_of(&values, EmptyInputPolicy::Zero).unwrap(), Some(1));
        assert_eq!(max_of(&values).unwrap(), Value::Int(3));
    }

    #[test]
    fn test_max_index_empty() {
        assert_eq!(max_index_of(&[], EmptyInputPolicy::Zero).unwrap(), None);
    }

    #[test]
    fn test_wrong_type_reports_index() {
        let values = vec![Value::Int(1), Value::from("two"), Value::Int(3)];
        assert_eq!(
            max_of(&values),
            Err(Error::WrongType {
                index: 1,
                expected: "number",
                actual: "String",
            })
        );
    }

    #[test]
    fn test_wrong_type_first_element() {
        let values = vec![Value::Null];
        assert!(matches!(
            max_of(&values),
            Err(Error::WrongType { index: 0, .. })
        ));
    }

    #[test]
    fn test_nan_is_unorderable() {
        let values = vec![Value::Float(1.0), Value::Float(f64::NAN)];
        assert_eq!(max_of(&values), Err(Error::Unorderable { index: 1 }));

        let leading = vec![Value::Float(f64::NAN)];
        assert_eq!(max_of(&leading), Err(Error::Unorderable { index: 0 }));
    }

    #[test]
    fn test_scan_max_strict_increase_only() {
        let items = [2, 5, 5, 1];
        let found = scan_max(&items, |_, a, b| Ok(a.partial_cmp(b))).unwrap();
        assert_eq!(found, Some((1, &5)));
    }

    #[test]
    fn test_scan_max_propagates_comparator_error() {
        let items = [1, 2, 3];
        let result = scan_max(&items, |index, _, _| {
            if index == 2 {
                Err(Error::InvalidConfig("stop".into()))
            } else {
                Ok(Some(Ordering::Less))
            }
        });
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_max_or_zero() {
        assert_eq!(max_or_zero::<i64>(&[]), 0);
        assert_eq!(max_or_zero(&[3, 1, 4, 1, 5, 9, 2, 6]), 9);
        assert_eq!(max_or_zero::<f64>(&[]), 0.0);
        assert_eq!(max_or_zero(&[1.5, f64::NAN, 0.5]), 1.5);
    }

    #[test]
    fn test_purity() {
        let values = ints(&[4, 8, 15, 16, 23, 42]);
        let first = max_of(&values).unwrap();
        let second = max_of(&values).unwrap();
        assert_eq!(first, second);
    }
}
