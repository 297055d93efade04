use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::shared::errors::AppError;

static CURRENCY_CODE: OnceLock<Regex> = OnceLock::new();

pub struct Validator;

impl Validator {
    pub fn validate_campaign_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Campaign name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > 120 {
            return Err(AppError::ValidationError(
                "Campaign name too long (max 120 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_brand_id(brand_id: &Uuid) -> Result<(), AppError> {
        if brand_id.is_nil() {
            return Err(AppError::ValidationError(
                "A brand is required to create a campaign".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_budget(budget: f64) -> Result<(), AppError> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(AppError::ValidationError(
                "Budget must be a non-negative amount".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_currency(currency: &str) -> Result<(), AppError> {
        let re = CURRENCY_CODE.get_or_init(|| {
            Regex::new(r"^[A-Z]{3}$").expect("currency pattern is a valid regex")
        });
        if !re.is_match(currency) {
            return Err(AppError::ValidationError(format!(
                "Currency '{}' must be a three-letter ISO code",
                currency
            )));
        }
        Ok(())
    }

    pub fn validate_date_range(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(), AppError> {
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(AppError::ValidationError(
                    "Campaign end date cannot be before its start date".to_string(),
                ));
            }
        }
        Ok(())
    }
}
