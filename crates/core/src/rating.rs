//! Per-user property ratings and their aggregate means.
//!
//! Each user holds at most one rating per property, scored on three criteria.
//! The property's displayed means are recomputed from every stored rating
//! after each submission rather than maintained incrementally.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lowest accepted score (inclusive).
pub const MIN_SCORE: f64 = 0.0;

/// Highest accepted score (inclusive).
pub const MAX_SCORE: f64 = 5.0;

/// One user's scores for a property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingScores {
    pub rating_clean: f64,
    pub rating_food: f64,
    pub rating_safety: f64,
}

/// Rating submission body. Fields are optional so absence is reported as a
/// validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingSubmission {
    pub rating_clean: Option<f64>,
    pub rating_food: Option<f64>,
    pub rating_safety: Option<f64>,
}

impl RatingSubmission {
    /// Validate all three scores and return them.
    pub fn into_scores(self) -> Result<RatingScores, CoreError> {
        let (Some(clean), Some(food), Some(safety)) =
            (self.rating_clean, self.rating_food, self.rating_safety)
        else {
            return Err(CoreError::Validation(
                "rating_clean, rating_food and rating_safety are required".to_string(),
            ));
        };

        let scores = RatingScores {
            rating_clean: clean,
            rating_food: food,
            rating_safety: safety,
        };
        scores.validate()?;
        Ok(scores)
    }
}

impl RatingScores {
    /// Every score must be a finite number in `[MIN_SCORE, MAX_SCORE]`.
    pub fn validate(&self) -> Result<(), CoreError> {
        for value in [self.rating_clean, self.rating_food, self.rating_safety] {
            if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(CoreError::Validation(
                    "Ratings must be between 0 and 5".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Mean of each criterion across a property's ratings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingAverages {
    pub clean: f64,
    pub food: f64,
    pub safety: f64,
}

/// Arithmetic mean of each column. `None` when there are no ratings.
pub fn compute_averages(ratings: &[RatingScores]) -> Option<RatingAverages> {
    if ratings.is_empty() {
        return None;
    }

    let (clean, food, safety) = ratings.iter().fold((0.0, 0.0, 0.0), |acc, r| {
        (
            acc.0 + r.rating_clean,
            acc.1 + r.rating_food,
            acc.2 + r.rating_safety,
        )
    });
    let n = ratings.len() as f64;

    Some(RatingAverages {
        clean: clean / n,
        food: food / n,
        safety: safety / n,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn scores(c: f64, f: f64, s: f64) -> RatingScores {
        RatingScores {
            rating_clean: c,
            rating_food: f,
            rating_safety: s,
        }
    }

    #[test]
    fn mean_of_two_ratings_is_exact() {
        let avg = compute_averages(&[scores(5.0, 5.0, 5.0), scores(3.0, 3.0, 3.0)]).unwrap();
        assert_eq!(
            avg,
            RatingAverages {
                clean: 4.0,
                food: 4.0,
                safety: 4.0
            }
        );
    }

    #[test]
    fn columns_are_averaged_independently() {
        let avg = compute_averages(&[scores(1.0, 2.0, 4.0), scores(3.0, 4.0, 5.0)]).unwrap();
        assert_eq!(avg.clean, 2.0);
        assert_eq!(avg.food, 3.0);
        assert_eq!(avg.safety, 4.5);
    }

    #[test]
    fn no_ratings_yields_none() {
        assert!(compute_averages(&[]).is_none());
    }

    #[test]
    fn boundaries_accepted() {
        assert!(scores(0.0, 5.0, 2.5).validate().is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        assert_matches!(scores(6.0, 1.0, 1.0).validate(), Err(CoreError::Validation(_)));
        assert_matches!(scores(1.0, -0.5, 1.0).validate(), Err(CoreError::Validation(_)));
        assert_matches!(scores(1.0, 1.0, f64::NAN).validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn missing_score_rejected() {
        let submission = RatingSubmission {
            rating_clean: Some(4.0),
            rating_food: None,
            rating_safety: Some(4.0),
        };
        assert_matches!(submission.into_scores(), Err(CoreError::Validation(_)));
    }
}
