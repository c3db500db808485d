//! Field validation for product write requests.
//!
//! The validators are pure functions over [`ProductInput`]. They never touch
//! the store, and running one twice on the same input gives the same answer.

use axum::http::StatusCode;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, ProductInput, UpdateProductPatch, UpdateProductPut};

pub const NAME_REQUIRED: &str = "name is required and must be a string";
pub const PRICE_REQUIRED: &str = "price is required and must be a number";
pub const NAME_NOT_STRING: &str = "name must be a string";
pub const PRICE_NOT_NUMBER: &str = "price must be a number";
pub const NO_FIELDS: &str = "Provide at least one field to update";

/// Outcome of validating a request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { status: StatusCode, message: String },
}

impl ValidationResult {
    fn invalid(message: &str) -> Self {
        ValidationResult::Invalid {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn into_result(self) -> ProductResult<()> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid { message, .. } => Err(ProductError::Validation(message)),
        }
    }
}

/// Rules for POST: non-empty string `name`, then numeric `price`.
pub fn validate_create(input: &ProductInput) -> ValidationResult {
    validate_required_fields(input)
}

/// Rules for PUT; the same as for creation.
pub fn validate_put(input: &ProductInput) -> ValidationResult {
    validate_required_fields(input)
}

fn validate_required_fields(input: &ProductInput) -> ValidationResult {
    if input.name_str().map_or(true, str::is_empty) {
        return ValidationResult::invalid(NAME_REQUIRED);
    }
    if input.price_number().is_none() {
        return ValidationResult::invalid(PRICE_REQUIRED);
    }
    ValidationResult::Valid
}

/// Rules for PATCH.
///
/// Fields that are present must have the right type (an empty name is
/// allowed), and at least one of them must be present.
pub fn validate_patch(input: &ProductInput) -> ValidationResult {
    if input.name.is_some() && input.name_str().is_none() {
        return ValidationResult::invalid(NAME_NOT_STRING);
    }
    if input.price.is_some() && input.price_number().is_none() {
        return ValidationResult::invalid(PRICE_NOT_NUMBER);
    }
    if input.name.is_none() && input.price.is_none() {
        return ValidationResult::invalid(NO_FIELDS);
    }
    ValidationResult::Valid
}

fn required_fields(input: &ProductInput) -> ProductResult<(String, f64)> {
    let name = input
        .name_str()
        .ok_or_else(|| ProductError::Validation(NAME_REQUIRED.to_string()))?;
    let price = input
        .price_number()
        .ok_or_else(|| ProductError::Validation(PRICE_REQUIRED.to_string()))?;
    Ok((name.to_string(), price))
}

impl TryFrom<ProductInput> for CreateProduct {
    type Error = ProductError;

    fn try_from(input: ProductInput) -> ProductResult<Self> {
        validate_create(&input).into_result()?;
        let (name, price) = required_fields(&input)?;
        Ok(CreateProduct { name, price })
    }
}

impl TryFrom<ProductInput> for UpdateProductPut {
    type Error = ProductError;

    fn try_from(input: ProductInput) -> ProductResult<Self> {
        validate_put(&input).into_result()?;
        let (name, price) = required_fields(&input)?;
        Ok(UpdateProductPut { name, price })
    }
}

impl TryFrom<ProductInput> for UpdateProductPatch {
    type Error = ProductError;

    fn try_from(input: ProductInput) -> ProductResult<Self> {
        validate_patch(&input).into_result()?;
        Ok(UpdateProductPatch {
            name: input.name_str().map(str::to_string),
            price: input.price_number(),
        })
    }
}
