//! Request payloads accepted by the HTTP layer and their validation.

use validator::ValidationErrors;

pub mod auth;
pub mod bids;
pub mod tenders;

/// Message of the first failing field, checked in `fields` order.
///
/// Every validated field carries a user-facing message; the raw validator
/// report is only returned for fields missing from `fields`.
pub(crate) fn first_message(errors: &ValidationErrors, fields: &[&str]) -> String {
    let field_errors = errors.field_errors();
    fields
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|list| list.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// Trimmed copy of `value`.
pub(crate) fn trim(value: String) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Please enter a title"))]
        title: String,
        #[validate(range(exclusive_min = 0.0, message = "Please enter a value"))]
        value: f64,
    }

    #[test]
    fn first_message_follows_field_order() {
        let errors = Sample {
            title: String::new(),
            value: 0.0,
        }
        .validate()
        .unwrap_err();

        assert_eq!(first_message(&errors, &["title", "value"]), "Please enter a title");
        assert_eq!(first_message(&errors, &["value", "title"]), "Please enter a value");
    }
}
