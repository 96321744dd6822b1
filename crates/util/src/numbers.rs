//! Numeric helpers.

use rand::Rng;

use crate::error::UtilError;

/// Random integer in `[min, max]`, both inclusive, from the thread-local RNG.
///
/// Use [`crate::Random`] for reproducible sequences.
///
/// # Examples
///
/// ```
/// use objkit_util::numbers::random;
///
/// let n = random(1, 10).unwrap();
/// assert!((1..=10).contains(&n));
/// assert!(random(10, 1).is_err());
/// ```
pub fn random(min: i64, max: i64) -> Result<i64, UtilError> {
    if min > max {
        return Err(UtilError::InvalidRange);
    }
    Ok(rand::thread_rng().gen_range(min..=max))
}

/// Clamp `num` into `[min, max]`.
///
/// # Examples
///
/// ```
/// use objkit_util::numbers::clamp;
///
/// assert_eq!(clamp(-5.0, 0.0, 10.0), Ok(0.0));
/// assert_eq!(clamp(15.0, 0.0, 10.0), Ok(10.0));
/// ```
pub fn clamp(num: f64, min: f64, max: f64) -> Result<f64, UtilError> {
    if min > max {
        return Err(UtilError::InvalidRange);
    }
    Ok(num.max(min).min(max))
}

fn valid<I>(values: I) -> impl Iterator<Item = f64>
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    values
        .into_iter()
        .filter_map(Into::<Option<f64>>::into)
        .filter(|n| !n.is_nan())
}

/// Sum of the values, skipping `None` and `NaN`.
///
/// # Examples
///
/// ```
/// use objkit_util::numbers::sum;
///
/// assert_eq!(sum([1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum([Some(1.5), None, Some(f64::NAN), Some(2.5)]), 4.0);
/// ```
pub fn sum<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    valid(values).sum()
}

/// Mean of the values, skipping `None` and `NaN`; `0` when nothing is left.
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    let (total, count) = valid(values)
        .fold((0.0, 0usize), |(total, count), n| (total + n, count + 1));
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
