//! BMI calculation and category lookup. Pure logic, no I/O.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BmiError {
    #[error("Height and weight must be greater than zero")]
    NonPositiveInput,

    #[error("No BMI category matches value {0}")]
    NoCategory(f64),
}

/// One row of the static category table. Ranges are half-open `[min, max)`;
/// the last range is open-ended.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiCategory {
    pub category: &'static str,
    pub description: &'static str,
    pub min_bmi: f64,
    pub max_bmi: Option<f64>,
    pub health_advice: &'static str,
}

/// WHO-style classification, fixed at compile time.
pub const BMI_CATEGORIES: [BmiCategory; 7] = [
    BmiCategory {
        category: "Severely underweight",
        description: "Weight is far below the healthy range",
        min_bmi: 0.0,
        max_bmi: Some(16.0),
        health_advice: "Gain weight and consult a doctor. Improve nutrition and train appropriately.",
    },
    BmiCategory {
        category: "Underweight",
        description: "Weight is below the normal range",
        min_bmi: 16.0,
        max_bmi: Some(18.5),
        health_advice: "Gain weight through a healthy diet and regular exercise.",
    },
    BmiCategory {
        category: "Normal",
        description: "Ideal weight for good health",
        min_bmi: 18.5,
        max_bmi: Some(25.0),
        health_advice: "Maintain a healthy lifestyle with a balanced diet and regular exercise.",
    },
    BmiCategory {
        category: "Overweight",
        description: "Weight is above the normal range",
        min_bmi: 25.0,
        max_bmi: Some(30.0),
        health_advice: "Lose weight with a lower-calorie diet and more physical activity.",
    },
    BmiCategory {
        category: "Obese I",
        description: "Mild obesity",
        min_bmi: 30.0,
        max_bmi: Some(35.0),
        health_advice: "Serious weight loss is needed. Consult a nutritionist and exercise regularly.",
    },
    BmiCategory {
        category: "Obese II",
        description: "Moderate obesity",
        min_bmi: 35.0,
        max_bmi: Some(40.0),
        health_advice: "Medical intervention is recommended. Ask a doctor about a safe weight-loss plan.",
    },
    BmiCategory {
        category: "Obese III",
        description: "Severe obesity",
        min_bmi: 40.0,
        max_bmi: None,
        health_advice: "Urgent medical intervention is required. Consult a specialist about treatment options.",
    },
];

/// Result of one calculation, echoing the inputs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiCalculation {
    pub height: f64,
    pub weight: f64,
    pub bmi_value: f64,
    pub category: &'static str,
    pub description: &'static str,
    pub health_advice: &'static str,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BmiService;

impl BmiService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// BMI = weight (kg) / height (m)², rounded to 2 decimal places.
    pub fn calculate(&self, height: f64, weight: f64) -> Result<BmiCalculation, BmiError> {
        if height <= 0.0 || weight <= 0.0 {
            return Err(BmiError::NonPositiveInput);
        }

        let bmi_value = round2(weight / (height * height));
        let category = self.categorize(bmi_value)?;

        Ok(BmiCalculation {
            height,
            weight,
            bmi_value,
            category: category.category,
            description: category.description,
            health_advice: category.health_advice,
            calculated_at: Utc::now(),
        })
    }

    /// Linear scan of the table in ascending order; fails only for negative
    /// values, which upstream validation already rejects.
    pub fn categorize(&self, bmi_value: f64) -> Result<&'static BmiCategory, BmiError> {
        BMI_CATEGORIES
            .iter()
            .find(|c| bmi_value >= c.min_bmi && c.max_bmi.is_none_or(|max| bmi_value < max))
            .ok_or(BmiError::NoCategory(bmi_value))
    }

    #[must_use]
    pub const fn categories(&self) -> &'static [BmiCategory] {
        &BMI_CATEGORIES
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_boundaries_are_half_open() {
        let svc = BmiService::new();

        assert_eq!(svc.categorize(18.5).unwrap().category, "Normal");
        assert_eq!(svc.categorize(18.49).unwrap().category, "Underweight");
        assert_eq!(svc.categorize(40.0).unwrap().category, "Obese III");
        assert_eq!(svc.categorize(0.0).unwrap().category, "Severely underweight");
        assert_eq!(svc.categorize(1000.0).unwrap().category, "Obese III");
    }

    #[test]
    fn negative_bmi_has_no_category() {
        let svc = BmiService::new();
        assert!(matches!(svc.categorize(-0.01), Err(BmiError::NoCategory(_))));
    }

    #[test]
    fn calculates_and_rounds_to_two_decimals() {
        let svc = BmiService::new();
        let result = svc.calculate(1.70, 70.0).unwrap();

        assert_eq!(result.bmi_value, 24.22);
        assert_eq!(result.category, "Normal");
    }

    #[test]
    fn rejects_non_positive_input() {
        let svc = BmiService::new();

        assert!(matches!(
            svc.calculate(0.0, 70.0),
            Err(BmiError::NonPositiveInput)
        ));
        assert!(matches!(
            svc.calculate(1.70, -1.0),
            Err(BmiError::NonPositiveInput)
        ));
    }

    #[test]
    fn table_covers_the_positive_axis_without_gaps() {
        for pair in BMI_CATEGORIES.windows(2) {
            assert_eq!(pair[0].max_bmi, Some(pair[1].min_bmi));
        }
        assert_eq!(BMI_CATEGORIES[0].min_bmi, 0.0);
        assert!(BMI_CATEGORIES.last().unwrap().max_bmi.is_none());
    }
}
