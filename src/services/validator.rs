use crate::dto::search::{FieldError, Filter, SearchRequest, Supplied};

/// Outcome of validating a [`SearchRequest`].
///
/// `filter` holds every field that validated on its own, even when `errors`
/// is non-empty; callers should go through [`Validation::into_result`].
#[derive(Debug, Default)]
pub struct Validation {
    pub filter: Filter,
    pub errors: Vec<FieldError>,
}

impl Validation {
    pub fn into_result(self) -> Result<Filter, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(self.filter)
        } else {
            Err(self.errors)
        }
    }

    fn accept<T>(
        &mut self,
        supplied: &Supplied<T>,
        field: &str,
        message: &str,
    ) -> Option<T>
    where
        T: Clone,
    {
        match supplied {
            Supplied::Absent => None,
            Supplied::Valid(value) => Some(value.clone()),
            Supplied::Invalid(_) => {
                self.errors.push(FieldError::new(field, message));
                None
            }
        }
    }
}

/// Checks every criterion independently and collects all violations.
pub fn validate(request: &SearchRequest) -> Validation {
    let mut validation = Validation::default();

    validation.filter.category =
        validation.accept(&request.category, "category", "Must be a string");
    validation.filter.min_price =
        validation.accept(&request.min_price, "minPrice", "Must be a number");
    validation.filter.max_price =
        validation.accept(&request.max_price, "maxPrice", "Must be a number");

    if let (Some(min), Some(max)) = (validation.filter.min_price, validation.filter.max_price) {
        if min > max {
            validation.errors.push(FieldError::new(
                "minPrice",
                "minPrice cannot be greater than maxPrice",
            ));
        }
    }

    validation.filter.in_stock_only =
        validation.accept(&request.in_stock_only, "inStockOnly", "Must be true or false");

    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate_json(body: serde_json::Value) -> Validation {
        validate(&SearchRequest::from_value(body))
    }

    #[test]
    fn empty_body_is_an_empty_filter() {
        let filter = validate_json(json!({})).into_result().unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn valid_body_is_copied_into_filter() {
        let filter = validate_json(json!({
            "category": "Books",
            "minPrice": 5,
            "maxPrice": 20.5,
            "inStockOnly": true,
            "sort": "ignored"
        }))
        .into_result()
        .unwrap();

        assert_eq!(
            filter,
            Filter {
                category: Some("Books".into()),
                min_price: Some(5.0),
                max_price: Some(20.5),
                in_stock_only: Some(true),
            }
        );
    }

    #[test]
    fn wrong_category_type() {
        let errors = validate_json(json!({ "category": 5 })).into_result().unwrap_err();
        assert_eq!(errors, vec![FieldError::new("category", "Must be a string")]);
    }

    #[test]
    fn inverted_range_yields_single_cross_check_error() {
        let errors = validate_json(json!({ "minPrice": 50, "maxPrice": 10 }))
            .into_result()
            .unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::new(
                "minPrice",
                "minPrice cannot be greater than maxPrice"
            )]
        );
    }

    #[test]
    fn equal_bounds_are_allowed() {
        assert!(validate_json(json!({ "minPrice": 10, "maxPrice": 10 })).errors.is_empty());
    }

    #[test]
    fn errors_accumulate_in_field_order() {
        let errors = validate_json(json!({
            "inStockOnly": "yes",
            "maxPrice": "cheap",
            "minPrice": null,
            "category": ["a"]
        }))
        .into_result()
        .unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["category", "minPrice", "maxPrice", "inStockOnly"]);
        assert_eq!(errors[3].message, "Must be true or false");
    }

    #[test]
    fn cross_check_runs_alongside_unrelated_errors() {
        let errors = validate_json(json!({
            "category": 1,
            "minPrice": 9,
            "maxPrice": 3,
            "inStockOnly": 0
        }))
        .into_result()
        .unwrap_err();

        assert_eq!(
            errors,
            vec![
                FieldError::new("category", "Must be a string"),
                FieldError::new("minPrice", "minPrice cannot be greater than maxPrice"),
                FieldError::new("inStockOnly", "Must be true or false"),
            ]
        );
    }

    #[test]
    fn cross_check_skipped_when_a_bound_is_invalid() {
        let errors = validate_json(json!({ "minPrice": 50, "maxPrice": "10" }))
            .into_result()
            .unwrap_err();
        assert_eq!(errors, vec![FieldError::new("maxPrice", "Must be a number")]);
    }

    #[test]
    fn best_effort_filter_keeps_valid_fields() {
        let validation = validate_json(json!({ "category": "Toys", "minPrice": "x" }));
        assert!(!validation.errors.is_empty());
        assert_eq!(validation.filter.category.as_deref(), Some("Toys"));
        assert_eq!(validation.filter.min_price, None);
    }

    #[test]
    fn empty_category_string_is_kept() {
        let filter = validate_json(json!({ "category": "" })).into_result().unwrap();
        assert_eq!(filter.category.as_deref(), Some(""));
    }

    #[test]
    fn validated_filter_round_trips() {
        let filter = Filter {
            category: Some("Garden".into()),
            min_price: Some(1.5),
            max_price: None,
            in_stock_only: Some(false),
        };
        let body = serde_json::to_value(&filter).unwrap();
        let again = validate_json(body).into_result().unwrap();
        assert_eq!(again, filter);
    }
}
