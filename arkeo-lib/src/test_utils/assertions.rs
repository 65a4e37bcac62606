//! Assertion helpers for client results.

use crate::validation::ValidationError;
use crate::{ArkeoError, Result};

/// Assert that `result` failed stateless validation.
///
/// # Panics
/// Panics if the result is `Ok` or failed for another reason.
pub fn assert_validation_error<T: std::fmt::Debug>(result: &Result<T>) -> &ValidationError {
    match result {
        Err(ArkeoError::Validation(err)) => err,
        Err(e) => panic!("expected a validation error, got: {}", e),
        Ok(value) => panic!("expected a validation error, got Ok({:?})", value),
    }
}

/// Assert that `result` is a `NotFound` for `resource_type`.
///
/// # Panics
/// Panics if the result is `Ok` or a different error.
pub fn assert_not_found<T: std::fmt::Debug>(result: &Result<T>, resource_type: &str) {
    match result {
        Err(ArkeoError::NotFound {
            resource_type: found,
            ..
        }) => assert_eq!(
            found, resource_type,
            "NotFound for the wrong resource type"
        ),
        Err(e) => panic!("expected {} not found, got: {}", resource_type, e),
        Ok(value) => panic!("expected {} not found, got Ok({:?})", resource_type, value),
    }
}
