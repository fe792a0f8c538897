use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Relative weight of each scored dimension in the composite fit score.
///
/// The default split is the behavioral contract of the engine; custom splits
/// must stay non-negative and sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl FitWeights {
    pub fn new(skills: f64, experience: f64, education: f64) -> Result<Self, WeightsError> {
        let weights = Self {
            skills,
            experience,
            education,
        };
        weights.validate()?;
        Ok(weights)
    }

    fn validate(&self) -> Result<(), WeightsError> {
        let dimensions = [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
        ];
        for (dimension, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::Invalid { dimension, value });
            }
        }

        let total = self.skills + self.experience + self.education;
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError::UnbalancedSum { total });
        }

        Ok(())
    }
}

impl Default for FitWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            education: 0.2,
        }
    }
}

/// Rejected weight configuration.
#[derive(Debug, thiserror::Error)]
pub enum WeightsError {
    #[error("weight for {dimension} must be a finite non-negative number, got {value}")]
    Invalid { dimension: &'static str, value: f64 },
    #[error("weights must sum to 1.0, got {total}")]
    UnbalancedSum { total: f64 },
}
