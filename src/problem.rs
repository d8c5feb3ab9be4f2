use thiserror::Error;

use crate::consts::EPS;

/// Reasons a set of judgments is rejected before any model is built.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InputError {
    #[error("at least 2 criteria are required, got {0}")]
    TooFewCriteria(usize),
    #[error("aB has {best_to_others} entries but aW has {others_to_worst}")]
    LengthMismatch {
        best_to_others: usize,
        others_to_worst: usize,
    },
    #[error("{name} {index} is out of range for {len} criteria")]
    IndexOutOfRange {
        name: &'static str,
        index: usize,
        len: usize,
    },
    #[error("best and worst criterion are both {0}")]
    SameBestAndWorst(usize),
    #[error("{vector}[{index}] = {value} is not a positive judgment")]
    NonPositiveJudgment {
        vector: &'static str,
        index: usize,
        value: f64,
    },
    #[error("{vector}[{index}] = {value} is below 1, judgments are on a 1-9 scale")]
    JudgmentBelowOne {
        vector: &'static str,
        index: usize,
        value: f64,
    },
    #[error("{vector}[{index}] is not a finite number")]
    NonFiniteJudgment { vector: &'static str, index: usize },
    #[error("{vector}[{index}] compares a criterion with itself and must be 1, got {value}")]
    SelfComparisonNotOne {
        vector: &'static str,
        index: usize,
        value: f64,
    },
    #[error("{len} criteria cannot all weigh at least {weight_min}")]
    TooManyCriteria { len: usize, weight_min: f64 },
    #[error("weight bounds [{min}, {max}] are not a sub-range of [0, 1]")]
    InvalidBounds { min: f64, max: f64 },
}

/// Validated Best-Worst judgments for `n` criteria.
///
/// `best_to_others[j]` says how strongly the best criterion is preferred over
/// criterion `j`, `others_to_worst[i]` how strongly criterion `i` is preferred
/// over the worst one.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonInput {
    best_to_others: Vec<f64>,
    others_to_worst: Vec<f64>,
    best_index: usize,
    worst_index: usize,
}

impl ComparisonInput {
    /// Checks every judgment invariant and takes ownership of the vectors.
    pub fn try_new(
        best_to_others: Vec<f64>,
        others_to_worst: Vec<f64>,
        best_index: usize,
        worst_index: usize,
    ) -> Result<Self, InputError> {
        let len = best_to_others.len();
        if len != others_to_worst.len() {
            return Err(InputError::LengthMismatch {
                best_to_others: len,
                others_to_worst: others_to_worst.len(),
            });
        }
        if len < 2 {
            return Err(InputError::TooFewCriteria(len));
        }
        for (name, index) in [("best_index", best_index), ("worst_index", worst_index)] {
            if index >= len {
                return Err(InputError::IndexOutOfRange { name, index, len });
            }
        }
        if best_index == worst_index {
            return Err(InputError::SameBestAndWorst(best_index));
        }

        check_judgments("aB", &best_to_others, best_index)?;
        check_judgments("aW", &others_to_worst, worst_index)?;

        Ok(ComparisonInput {
            best_to_others,
            others_to_worst,
            best_index,
            worst_index,
        })
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.best_to_others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_to_others.is_empty()
    }

    pub fn best_to_others(&self) -> &[f64] {
        &self.best_to_others
    }

    pub fn others_to_worst(&self) -> &[f64] {
        &self.others_to_worst
    }

    pub fn best_index(&self) -> usize {
        self.best_index
    }

    pub fn worst_index(&self) -> usize {
        self.worst_index
    }
}

fn check_judgments(
    vector: &'static str,
    values: &[f64],
    self_index: usize,
) -> Result<(), InputError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(InputError::NonFiniteJudgment { vector, index });
        }
        if value <= 0.0 {
            return Err(InputError::NonPositiveJudgment {
                vector,
                index,
                value,
            });
        }
        if value < 1.0 - EPS {
            return Err(InputError::JudgmentBelowOne {
                vector,
                index,
                value,
            });
        }
    }
    let value = values[self_index];
    if (value - 1.0).abs() > EPS {
        return Err(InputError::SelfComparisonNotOne {
            vector,
            index: self_index,
            value,
        });
    }
    Ok(())
}
