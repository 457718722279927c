use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};
use crate::errors::AppError;
use crate::models::employee::DEPARTMENTS;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()
        .map_err(|err| AppError::BadRequest(describe_errors(&err)))
}

pub fn validate_department(department: &str) -> Result<(), ValidationError> {
    if !DEPARTMENTS.contains(&department) {
        let mut err = ValidationError::new("department");
        err.message = Some(Cow::from(format!(
            "Department must be one of: {}",
            DEPARTMENTS.join(", ")
        )));
        return Err(err);
    }
    Ok(())
}

// Fields are sorted so the message is stable across runs.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let details: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => format!("{} at \"{}\"", message, field),
                None => format!("{} at \"{}\"", err.code, field),
            })
        })
        .collect();

    format!("Validation error: {}", details.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::{EmployeeUpdate, NewEmployee};
    use serde_json::json;

    fn new_employee(email: &str, department: &str) -> NewEmployee {
        serde_json::from_value(json!({
            "name": "Michael Chen",
            "role": "Product Manager",
            "department": department,
            "city": "New York",
            "email": email,
            "joinDate": "2024-03-22T00:00:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn accepts_known_departments() {
        for department in DEPARTMENTS {
            assert!(validate_department(department).is_ok());
        }
        assert!(validate_department("engineering").is_err());
        assert!(validate_department("").is_err());
    }

    #[test]
    fn invalid_email_is_a_bad_request() {
        let err = validate_payload(&new_employee("not-an-email", "Product")).unwrap_err();
        match err {
            AppError::BadRequest(msg) => {
                assert!(msg.contains("Invalid email address"), "{}", msg);
                assert!(msg.contains("email"), "{}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unknown_department_is_rejected() {
        assert!(validate_payload(&new_employee("m@example.com", "Legal")).is_err());
        assert!(validate_payload(&new_employee("m@example.com", "Product")).is_ok());
    }

    #[test]
    fn update_checks_only_present_fields() {
        let empty: EmployeeUpdate = serde_json::from_value(json!({})).unwrap();
        assert!(validate_payload(&empty).is_ok());

        let bad: EmployeeUpdate = serde_json::from_value(json!({ "email": "nope" })).unwrap();
        assert!(validate_payload(&bad).is_err());

        let blank: EmployeeUpdate = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert!(validate_payload(&blank).is_err());
    }
}
