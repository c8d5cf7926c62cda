//! Ternary search for the extremum of a unimodal function.

use serde::{Deserialize, Serialize};

use crate::error::CodebookError;

/// Which extremum [`ternary_search`] looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extremum {
    /// Locate the minimum.
    #[default]
    Minimum,
    /// Locate the maximum.
    Maximum,
}

/// Configuration for [`ternary_search`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TernarySearchConfig {
    /// Width below which the search bracket is considered converged.
    ///
    /// Default: `1e-6`.
    pub epsilon: f64,
    /// The extremum to locate.
    ///
    /// Default: [`Extremum::Minimum`].
    pub extremum: Extremum,
}

impl Default for TernarySearchConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            extremum: Extremum::Minimum,
        }
    }
}

/// Narrows `[left, right]` around the extremum of the unimodal `func` and
/// returns the midpoint of the final bracket.
///
/// Each round evaluates `func` at the two trisection points and discards the
/// third of the bracket that cannot contain the extremum. The search also
/// stops once the trisection points can no longer be separated from the
/// bounds in floating point.
///
/// # Errors
///
/// Returns [`CodebookError::InvalidArgument`] if either bound is not finite,
/// if `left > right`, or if `config.epsilon` is not a positive finite number.
///
/// # Examples
///
/// ```
/// use codebook_core::{TernarySearchConfig, ternary_search};
///
/// let config = TernarySearchConfig::default();
/// let x = ternary_search(|x| (x - 2.0) * (x - 2.0), -10.0, 10.0, &config)?;
/// assert!((x - 2.0).abs() < 1e-5);
/// # Ok::<(), codebook_core::CodebookError>(())
/// ```
pub fn ternary_search<F>(
    func: F,
    left: f64,
    right: f64,
    config: &TernarySearchConfig,
) -> Result<f64, CodebookError>
where
    F: Fn(f64) -> f64,
{
    if !left.is_finite() || !right.is_finite() {
        return Err(CodebookError::invalid("search bounds must be finite"));
    }
    if left > right {
        return Err(CodebookError::invalid("left bound exceeds right bound"));
    }
    if !(config.epsilon.is_finite() && config.epsilon > 0.0) {
        return Err(CodebookError::invalid("epsilon must be positive and finite"));
    }

    let (mut left, mut right) = (left, right);
    while right - left > config.epsilon {
        let third = (right - left) / 3.0;
        let m1 = left + third;
        let m2 = right - third;
        let lower = func(m1) < func(m2);
        let (next_left, next_right) = match (config.extremum, lower) {
            (Extremum::Minimum, true) | (Extremum::Maximum, false) => (left, m2),
            (Extremum::Minimum, false) | (Extremum::Maximum, true) => (m1, right),
        };
        if next_left <= left && next_right >= right {
            break;
        }
        (left, right) = (next_left, next_right);
    }
    Ok(left + (right - left) / 2.0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn finds_minimum_of_parabola() {
        let x = ternary_search(
            |x| (x - 2.0).powi(2),
            -10.0,
            10.0,
            &TernarySearchConfig::default(),
        )
        .expect("valid bounds");
        assert!((x - 2.0).abs() < 1e-5, "got {x}");
    }

    #[test]
    fn finds_maximum_of_inverted_parabola() {
        let config = TernarySearchConfig {
            extremum: Extremum::Maximum,
            ..TernarySearchConfig::default()
        };
        let x = ternary_search(|x| 3.0 - (x + 1.0).powi(2), -5.0, 5.0, &config)
            .expect("valid bounds");
        assert!((x + 1.0).abs() < 1e-5, "got {x}");
    }

    #[test]
    fn extremum_on_boundary() {
        let x = ternary_search(|x| x, 0.0, 1.0, &TernarySearchConfig::default())
            .expect("valid bounds");
        assert!(x.abs() < 1e-5, "got {x}");
    }

    #[test]
    fn coarse_epsilon_stops_early() {
        let config = TernarySearchConfig {
            epsilon: 0.5,
            ..TernarySearchConfig::default()
        };
        let x = ternary_search(|x| (x - 1.0).abs(), 0.0, 4.0, &config).expect("valid bounds");
        assert!((x - 1.0).abs() < 0.5, "got {x}");
    }

    #[test]
    fn degenerate_bracket_returns_bound() {
        let x = ternary_search(|x| x * x, 3.0, 3.0, &TernarySearchConfig::default())
            .expect("valid bounds");
        assert!((x - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tiny_epsilon_terminates() {
        let config = TernarySearchConfig {
            epsilon: f64::MIN_POSITIVE,
            ..TernarySearchConfig::default()
        };
        let x = ternary_search(|x| (x - 0.25).powi(2), 0.0, 1.0, &config).expect("valid bounds");
        assert!((x - 0.25).abs() < 1e-6, "got {x}");
    }

    #[test]
    fn invalid_arguments() {
        let config = TernarySearchConfig::default();
        assert!(ternary_search(|x| x, 1.0, 0.0, &config).is_err());
        assert!(ternary_search(|x| x, f64::NAN, 0.0, &config).is_err());
        assert!(ternary_search(|x| x, 0.0, f64::INFINITY, &config).is_err());
        let zero = TernarySearchConfig {
            epsilon: 0.0,
            ..config
        };
        assert!(ternary_search(|x| x, 0.0, 1.0, &zero).is_err());
    }

    #[test]
    fn config_serializes_extremum_in_snake_case() {
        let value = serde_json::to_value(TernarySearchConfig::default()).expect("serializable");
        assert_eq!(value["extremum"], "minimum");
        let back: TernarySearchConfig = serde_json::from_value(value).expect("round trip");
        assert_eq!(back.extremum, Extremum::Minimum);
        assert!((back.epsilon - 1e-6).abs() < 1e-12);
    }
}
