//! ROC curve result type.

/// Result of an AUC computation: the area and the staircase curve it was
/// integrated from.
///
/// `fpr` and `tpr` have one point more than there were scored observations,
/// start at 0 and are non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    /// Area under the ROC curve.
    pub auc: f64,
    /// False positive rate at each step of the sweep.
    pub fpr: Vec<f64>,
    /// True positive rate at each step of the sweep.
    pub tpr: Vec<f64>,
    /// Number of labels equal to 1.
    pub number_positive: usize,
    /// Number of labels equal to 0.
    pub number_negative: usize,
}

impl RocCurve {
    /// Number of curve points (observations + 1).
    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    /// Always false: a curve holds at least its origin.
    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }

    /// Iterate over `(fpr, tpr)` points, e.g. to hand them to a plotting tool.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.fpr.iter().copied().zip(self.tpr.iter().copied())
    }

    /// Split into the `(auc, fpr, tpr)` triple.
    pub fn into_parts(self) -> (f64, Vec<f64>, Vec<f64>) {
        (self.auc, self.fpr, self.tpr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_and_parts() {
        let curve = RocCurve {
            auc: 1.0,
            fpr: vec![0.0, 0.0, 1.0],
            tpr: vec![0.0, 1.0, 1.0],
            number_positive: 1,
            number_negative: 1,
        };

        let points: Vec<_> = curve.points().collect();
        assert_eq!(points, vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        assert_eq!(curve.len(), 3);
        assert!(!curve.is_empty());

        let (auc, fpr, tpr) = curve.into_parts();
        assert_eq!(auc, 1.0);
        assert_eq!(fpr.len(), tpr.len());
    }
}
