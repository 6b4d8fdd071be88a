//! Tabulated hazard curves and their inversion.

use serde::Serialize;

use disagg_core::config::Interpolation;
use disagg_core::errors::CurveError;
use disagg_core::traits::HazardCurve;

/// A hazard curve sampled at increasing ground-motion levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabulatedHazardCurve {
    levels: Vec<f64>,
    poes: Vec<f64>,
    interpolation: Interpolation,
}

impl TabulatedHazardCurve {
    /// Build a curve from paired levels and exceedance probabilities.
    ///
    /// Levels must be strictly increasing, probabilities within [0, 1] and
    /// non-increasing, and all values finite.
    pub fn new(levels: Vec<f64>, poes: Vec<f64>) -> Result<Self, CurveError> {
        if levels.len() != poes.len() {
            return Err(CurveError::LengthMismatch {
                levels: levels.len(),
                poes: poes.len(),
            });
        }
        if levels.len() < 2 {
            return Err(CurveError::TooFewPoints { len: levels.len() });
        }
        if let Some(index) = levels
            .iter()
            .zip(&poes)
            .position(|(l, p)| !l.is_finite() || !p.is_finite())
        {
            return Err(CurveError::NonFinite { index });
        }
        if let Some(index) = poes.iter().position(|p| !(0.0..=1.0).contains(p)) {
            return Err(CurveError::InvalidPoe {
                index,
                value: poes[index],
            });
        }
        if let Some(index) = levels.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CurveError::LevelsNotIncreasing { index: index + 1 });
        }
        if let Some(index) = poes.windows(2).position(|w| w[1] > w[0]) {
            return Err(CurveError::PoesNotDecreasing { index: index + 1 });
        }

        Ok(Self {
            levels,
            poes,
            interpolation: Interpolation::default(),
        })
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn poes(&self) -> &[f64] {
        &self.poes
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Exceedance probability at `iml`, interpolated the same way as the
    /// inversion. Levels outside the table clamp to the end values.
    ///
    /// Log-log interpolation fails with `NonPositive` on a non-positive level
    /// or probability, as `iml_for_poe` does.
    pub fn poe_at(&self, iml: f64) -> Result<f64, CurveError> {
        let last = self.levels.len() - 1;
        if iml <= self.levels[0] {
            return Ok(self.poes[0]);
        }
        if iml >= self.levels[last] {
            return Ok(self.poes[last]);
        }
        let i = self.levels.windows(2).position(|w| iml < w[1]).unwrap_or(last - 1);
        let (l0, l1, p0, p1) = (self.levels[i], self.levels[i + 1], self.poes[i], self.poes[i + 1]);
        match self.interpolation {
            Interpolation::Linear => Ok(p0 + (iml - l0) / (l1 - l0) * (p1 - p0)),
            Interpolation::LogLog => {
                if let Some(&value) = [l0, l1, p0, p1, iml].iter().find(|v| **v <= 0.0) {
                    return Err(CurveError::NonPositive { value });
                }
                let t = (iml.ln() - l0.ln()) / (l1.ln() - l0.ln());
                Ok((p0.ln() + t * (p1.ln() - p0.ln())).exp())
            }
        }
    }

    fn interpolate(&self, i: usize, poe: f64) -> Result<f64, CurveError> {
        let (l0, l1, p0, p1) = (self.levels[i], self.levels[i + 1], self.poes[i], self.poes[i + 1]);
        match self.interpolation {
            Interpolation::Linear => {
                let t = (p0 - poe) / (p0 - p1);
                Ok(l0 + t * (l1 - l0))
            }
            Interpolation::LogLog => {
                if let Some(&value) = [l0, l1, p0, p1, poe].iter().find(|v| **v <= 0.0) {
                    return Err(CurveError::NonPositive { value });
                }
                let t = (p0.ln() - poe.ln()) / (p0.ln() - p1.ln());
                Ok((l0.ln() + t * (l1.ln() - l0.ln())).exp())
            }
        }
    }
}

impl HazardCurve for TabulatedHazardCurve {
    /// Level at which the curve equals `poe`.
    ///
    /// Exact tabulated matches return the lowest matching level; otherwise the
    /// two bracketing points are interpolated.
    fn iml_for_poe(&self, poe: f64) -> Result<f64, CurveError> {
        let max = self.poes[0];
        let min = self.poes[self.poes.len() - 1];
        if !(min..=max).contains(&poe) {
            return Err(CurveError::OutOfRange { poe, min, max });
        }

        for i in 0..self.poes.len() - 1 {
            if self.poes[i] == poe {
                return Ok(self.levels[i]);
            }
            if self.poes[i + 1] == poe {
                return Ok(self.levels[i + 1]);
            }
            if self.poes[i] > poe && poe > self.poes[i + 1] {
                return self.interpolate(i, poe);
            }
        }

        // Unreachable for poe within [min, max].
        Err(CurveError::OutOfRange { poe, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> TabulatedHazardCurve {
        TabulatedHazardCurve::new(vec![0.1, 0.2, 0.4, 0.8], vec![0.5, 0.2, 0.1, 0.01]).unwrap()
    }

    #[test]
    fn test_exact_match_returns_level() {
        assert_eq!(curve().iml_for_poe(0.2).unwrap(), 0.2);
        assert_eq!(curve().iml_for_poe(0.5).unwrap(), 0.1);
        assert_eq!(curve().iml_for_poe(0.01).unwrap(), 0.8);
    }

    #[test]
    fn test_linear_interpolation() {
        let iml = curve().iml_for_poe(0.15).unwrap();
        assert!((iml - 0.3).abs() < 1e-12, "got {iml}");
    }

    #[test]
    fn test_log_log_interpolation() {
        let curve = curve().with_interpolation(Interpolation::LogLog);
        let iml = curve.iml_for_poe(0.15).unwrap();
        assert!(iml > 0.2 && iml < 0.4);
        // Round trip through the forward interpolation.
        assert!((curve.poe_at(iml).unwrap() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_flat_segment_returns_lowest_level() {
        let curve = TabulatedHazardCurve::new(vec![0.1, 0.2, 0.3], vec![0.5, 0.5, 0.1]).unwrap();
        assert_eq!(curve.iml_for_poe(0.5).unwrap(), 0.1);
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            curve().iml_for_poe(0.9),
            Err(CurveError::OutOfRange { .. })
        ));
        assert!(matches!(
            curve().iml_for_poe(0.001),
            Err(CurveError::OutOfRange { .. })
        ));
        assert!(curve().iml_for_poe(f64::NAN).is_err());
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            TabulatedHazardCurve::new(vec![0.1], vec![0.5]),
            Err(CurveError::TooFewPoints { len: 1 })
        ));
        assert!(matches!(
            TabulatedHazardCurve::new(vec![0.1, 0.2], vec![0.5]),
            Err(CurveError::LengthMismatch { .. })
        ));
        assert!(matches!(
            TabulatedHazardCurve::new(vec![0.2, 0.1], vec![0.5, 0.1]),
            Err(CurveError::LevelsNotIncreasing { index: 1 })
        ));
        assert!(matches!(
            TabulatedHazardCurve::new(vec![0.1, 0.2], vec![0.1, 0.5]),
            Err(CurveError::PoesNotDecreasing { index: 1 })
        ));
        assert!(matches!(
            TabulatedHazardCurve::new(vec![0.1, 0.2], vec![1.5, 0.5]),
            Err(CurveError::InvalidPoe { index: 0, .. })
        ));
    }

    #[test]
    fn test_log_log_rejects_zero_poe() {
        let curve = TabulatedHazardCurve::new(vec![0.1, 0.2], vec![0.5, 0.0])
            .unwrap()
            .with_interpolation(Interpolation::LogLog);
        assert!(matches!(
            curve.iml_for_poe(0.25),
            Err(CurveError::NonPositive { .. })
        ));
        // The forward direction agrees instead of falling back to linear.
        assert!(matches!(
            curve.poe_at(0.15),
            Err(CurveError::NonPositive { .. })
        ));
        let linear = curve.with_interpolation(Interpolation::Linear);
        assert!((linear.poe_at(0.15).unwrap() - 0.25).abs() < 1e-12);
    }
}
