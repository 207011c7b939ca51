//! Grading scale configuration.

use super::types::Grade;

/// Inclusive range of grades a rating operation accepts.
///
/// # Defaults
///
/// ```
/// use u_gradebook::grades::GradeScale;
///
/// let scale = GradeScale::default();
/// assert_eq!((scale.min, scale.max), (0, 10));
/// assert!(scale.contains(10));
/// assert!(!scale.contains(11));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_gradebook::grades::GradeScale;
///
/// let scale = GradeScale::default().with_min(1).with_max(5);
/// assert!(scale.validate().is_ok());
/// assert!(!scale.contains(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeScale {
    /// Lowest accepted grade.
    pub min: Grade,

    /// Highest accepted grade.
    pub max: Grade,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self { min: 0, max: 10 }
    }
}

impl GradeScale {
    /// Sets the lowest accepted grade.
    pub fn with_min(mut self, min: Grade) -> Self {
        self.min = min;
        self
    }

    /// Sets the highest accepted grade.
    pub fn with_max(mut self, max: Grade) -> Self {
        self.max = max;
        self
    }

    /// Whether `grade` lies within `min..=max`.
    ///
    /// An inverted scale contains nothing.
    pub fn contains(&self, grade: Grade) -> bool {
        (self.min..=self.max).contains(&grade)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.min > self.max {
            return Err(format!(
                "min ({}) must not exceed max ({})",
                self.min, self.max
            ));
        }
        Ok(())
    }
}
