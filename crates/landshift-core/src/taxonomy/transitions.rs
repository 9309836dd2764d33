//! Transition priors between land classes and the critical-transition table.

use serde::{Deserialize, Serialize};

use crate::types::snapshot::{LandClass, ProbVec, NUM_CLASSES};

/// Row-stochastic transition matrix over the class taxonomy. Each row is a
/// distribution over destination classes for one Markov step (one year of
/// class drift). Built once; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionMatrix {
    rows: Vec<[f64; NUM_CLASSES]>,
}

impl TransitionMatrix {
    /// Build from a diagonal self-transition prior plus hand-specified
    /// off-diagonal weights, then normalize each row to sum to 1.
    /// A weight replaces the cell value rather than adding to it.
    pub fn from_weights(self_prior: f64, weights: &[(LandClass, LandClass, f64)]) -> Self {
        let mut rows = vec![[0.0; NUM_CLASSES]; NUM_CLASSES];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = self_prior;
        }
        for &(from, to, weight) in weights {
            rows[from.index()][to.index()] = weight;
        }
        for row in &mut rows {
            let sum: f64 = row.iter().sum();
            if sum > 0.0 {
                for cell in row.iter_mut() {
                    *cell /= sum;
                }
            }
        }
        Self { rows }
    }

    /// Probability of moving from one class to another in one step.
    pub fn probability(&self, from: LandClass, to: LandClass) -> f64 {
        self.rows[from.index()][to.index()]
    }

    /// One Markov step: row-vector × matrix.
    pub fn step(&self, probs: &ProbVec) -> ProbVec {
        let mut next: ProbVec = ProbVec::from_elem(0.0, NUM_CLASSES);
        for (i, &p) in probs.iter().enumerate() {
            if p == 0.0 {
                continue;
            }
            for (j, cell) in next.iter_mut().enumerate() {
                *cell += p * self.rows[i][j];
            }
        }
        next
    }
}

/// One critical from-set → to-set pair. Any transition matching a pair is
/// always treated as high severity by the impact scorer.
#[derive(Debug, Clone)]
pub struct CriticalTransition {
    pub from: Vec<LandClass>,
    pub to: Vec<LandClass>,
}

/// Hand-specified conversions of natural land to built/agricultural use.
pub fn critical_transitions() -> Vec<CriticalTransition> {
    use LandClass::*;
    vec![
        CriticalTransition {
            from: vec![Forest],
            to: vec![AnnualCrop, Industrial, Highway, Residential],
        },
        CriticalTransition {
            from: vec![River, SeaLake],
            to: vec![AnnualCrop, Industrial, Highway, Residential],
        },
        CriticalTransition {
            from: vec![HerbaceousVegetation, Pasture],
            to: vec![Industrial, Highway],
        },
    ]
}

/// Built-in off-diagonal transition weights.
pub fn builtin_weights() -> Vec<(LandClass, LandClass, f64)> {
    use LandClass::*;
    vec![
        (Forest, AnnualCrop, 0.05),
        (Forest, Residential, 0.03),
        (Forest, Industrial, 0.02),
        (AnnualCrop, Residential, 0.04),
        (AnnualCrop, Industrial, 0.02),
        (AnnualCrop, Forest, 0.01),
        (Pasture, AnnualCrop, 0.06),
        (Pasture, Residential, 0.03),
        (HerbaceousVegetation, AnnualCrop, 0.05),
        (HerbaceousVegetation, Forest, 0.02),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> TransitionMatrix {
        TransitionMatrix::from_weights(crate::constants::SELF_TRANSITION_PRIOR, &builtin_weights())
    }

    #[test]
    fn rows_sum_to_one() {
        let m = builtin();
        for from in LandClass::ALL {
            let sum: f64 = LandClass::ALL
                .iter()
                .map(|&to| m.probability(from, to))
                .sum();
            assert!((sum - 1.0).abs() < 1e-12, "{from} row sums to {sum}");
        }
    }

    #[test]
    fn self_transition_dominates() {
        let m = builtin();
        for from in LandClass::ALL {
            let stay = m.probability(from, from);
            for to in LandClass::ALL {
                if to != from {
                    assert!(stay > m.probability(from, to));
                }
            }
        }
    }

    #[test]
    fn step_preserves_total_mass() {
        let m = builtin();
        let mut probs = ProbVec::from_elem(0.0, NUM_CLASSES);
        probs[LandClass::Forest.index()] = 1.0;
        for _ in 0..25 {
            probs = m.step(&probs);
            let sum: f64 = probs.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "mass drifted to {sum}");
        }
        // Forest mass leaks toward cropland over time.
        assert!(probs[LandClass::AnnualCrop.index()] > 0.0);
    }
}
