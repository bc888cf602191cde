use serde::{Deserialize, Serialize};

/// Standardization parameters for one numeric feature.
///
/// Uses the population standard deviation (divide by n). A feature whose
/// values are all identical would have a zero deviation; it is stored as 1 so
/// the scaled value is simply the distance from the mean.
///
/// Non-finite values take no part in the fit and scale to 0.0, the mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: f64,
    std: f64,
}

impl StandardScaler {
    /// Fit over the given values. Returns `None` for an empty input.
    pub fn fit<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut seen = false;
        let values: Vec<f64> = values
            .into_iter()
            .inspect(|_| seen = true)
            .filter(|v| v.is_finite())
            .map(f64::from)
            .collect();
        if !seen {
            return None;
        }
        if values.is_empty() {
            tracing::warn!("no finite values to fit, using unit scaling");
            return Some(Self { mean: 0.0, std: 1.0 });
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        Some(Self {
            mean,
            std: if std > 0.0 && std.is_finite() { std } else { 1.0 },
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std(&self) -> f64 {
        self.std
    }

    /// `(value - mean) / std`, or 0.0 when either side is not finite
    #[inline]
    pub fn scale(&self, value: f32) -> f32 {
        let scaled = ((f64::from(value) - self.mean) / self.std) as f32;
        if scaled.is_finite() {
            scaled
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_population_std() {
        let scaler = StandardScaler::fit([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((scaler.mean() - 5.0).abs() < 1e-9);
        assert!((scaler.std() - 2.0).abs() < 1e-9);
        assert!((scaler.scale(9.0) - 2.0).abs() < 1e-6);
        assert!((scaler.scale(5.0)).abs() < 1e-6);
    }

    #[test]
    fn test_constant_feature_uses_unit_std() {
        let scaler = StandardScaler::fit([50.0, 50.0, 50.0]).unwrap();
        assert_eq!(scaler.std(), 1.0);
        assert_eq!(scaler.scale(50.0), 0.0);
        assert_eq!(scaler.scale(53.0), 3.0);
    }

    #[test]
    fn test_single_value() {
        let scaler = StandardScaler::fit([12.0]).unwrap();
        assert_eq!(scaler.mean(), 12.0);
        assert_eq!(scaler.std(), 1.0);
    }

    #[test]
    fn test_non_finite_values_are_skipped() {
        let scaler = StandardScaler::fit([20.0, f32::INFINITY, 40.0, f32::NAN]).unwrap();
        assert!((scaler.mean() - 30.0).abs() < 1e-9);
        assert!((scaler.std() - 10.0).abs() < 1e-9);
        assert_eq!(scaler.scale(f32::INFINITY), 0.0);
        assert_eq!(scaler.scale(f32::NAN), 0.0);
        assert!((scaler.scale(40.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_only_non_finite_values_use_unit_scaling() {
        let scaler = StandardScaler::fit([f32::NAN, f32::NEG_INFINITY]).unwrap();
        assert_eq!(scaler.mean(), 0.0);
        assert_eq!(scaler.std(), 1.0);
        assert_eq!(scaler.scale(f32::NAN), 0.0);
    }

    #[test]
    fn test_empty_is_none() {
        assert!(StandardScaler::fit(std::iter::empty()).is_none());
    }
}
