use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, Utc};
use validator::Validate;
use crate::utils::validation::validate_department;

pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Design",
    "Product",
    "Marketing",
    "Sales",
    "Human Resources",
    "Finance",
    "Operations",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub department: String,
    pub city: String,
    pub email: String,
    pub phone: Option<String>,
    pub join_date: DateTime<Utc>,
    pub about: Option<String>,
}

#[derive(Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    #[validate(custom = "validate_department")]
    pub department: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub join_date: DateTime<Utc>,
    pub about: Option<String>,
}

/// Change to an optional field in an update payload.
///
/// A key missing from the JSON body is `Unset`, an explicit `null` is
/// `Cleared`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Unset,
    Cleared,
    Value(T),
}

impl<T> Patch<T> {
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Unset => current,
            Patch::Cleared => None,
            Patch::Value(value) => Some(value),
        }
    }
}

// Only called for keys present in the body; absent keys fall back to
// `#[serde(default)]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Cleared,
        })
    }
}

#[derive(Deserialize, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: Option<String>,
    #[validate(custom = "validate_department")]
    pub department: Option<String>,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Patch<String>,
    pub join_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub about: Patch<String>,
}

impl Employee {
    pub fn from_new(id: i32, new_employee: NewEmployee) -> Self {
        Employee {
            id,
            name: new_employee.name,
            role: new_employee.role,
            department: new_employee.department,
            city: new_employee.city,
            email: new_employee.email,
            phone: new_employee.phone,
            join_date: new_employee.join_date,
            about: new_employee.about,
        }
    }

    /// Overwrites supplied fields and keeps the rest; `id` never changes.
    pub fn merge(self, update: EmployeeUpdate) -> Self {
        Employee {
            id: self.id,
            name: update.name.unwrap_or(self.name),
            role: update.role.unwrap_or(self.role),
            department: update.department.unwrap_or(self.department),
            city: update.city.unwrap_or(self.city),
            email: update.email.unwrap_or(self.email),
            phone: update.phone.apply(self.phone),
            join_date: update.join_date.unwrap_or(self.join_date),
            about: update.about.apply(self.about),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeSearch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub city: Option<String>,
    pub joined_after: Option<String>,
}

// Built from raw query pairs: the first value of a repeated key wins and
// unknown keys are dropped, so a search query can never be rejected.
impl FromIterator<(String, String)> for EmployeeSearch {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut search = EmployeeSearch::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut search.name,
                "role" => &mut search.role,
                "department" => &mut search.department,
                "city" => &mut search.city,
                "joinedAfter" => &mut search.joined_after,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn employee() -> Employee {
        Employee {
            id: 7,
            name: "Sarah Johnson".to_string(),
            role: "Senior Developer".to_string(),
            department: "Engineering".to_string(),
            city: "San Francisco".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            phone: Some("(555) 123-4567".to_string()),
            join_date: "2023-01-15T00:00:00Z".parse().unwrap(),
            about: Some("Frontend specialist".to_string()),
        }
    }

    #[test]
    fn update_distinguishes_missing_from_null() {
        let update: EmployeeUpdate = serde_json::from_value(json!({ "phone": null })).unwrap();
        assert_eq!(update.phone, Patch::Cleared);
        assert_eq!(update.about, Patch::Unset);

        let update: EmployeeUpdate = serde_json::from_value(json!({ "about": "Hello" })).unwrap();
        assert_eq!(update.about, Patch::Value("Hello".to_string()));
        assert_eq!(update.phone, Patch::Unset);
    }

    #[test]
    fn merge_with_empty_update_keeps_record() {
        let original = employee();
        assert_eq!(original.clone().merge(EmployeeUpdate::default()), original);
    }

    #[test]
    fn merge_overwrites_only_supplied_fields() {
        let update: EmployeeUpdate =
            serde_json::from_value(json!({ "name": "X", "phone": null })).unwrap();
        let merged = employee().merge(update);

        assert_eq!(merged.name, "X");
        assert_eq!(merged.phone, None);
        assert_eq!(merged.about, Some("Frontend specialist".to_string()));
        assert_eq!(merged.role, "Senior Developer");
        assert_eq!(merged.id, 7);
    }

    #[test]
    fn employee_serializes_camel_case_with_null_optionals() {
        let mut record = employee();
        record.phone = None;
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["joinDate"], json!("2023-01-15T00:00:00Z"));
        assert_eq!(value["phone"], serde_json::Value::Null);
        assert!(value.get("join_date").is_none());
    }

    #[test]
    fn search_keeps_first_value_of_repeated_keys() {
        let pairs = [
            ("name", "sarah"),
            ("name", "chen"),
            ("joinedAfter", "2024-01-01"),
            ("page", "2"),
        ];
        let search: EmployeeSearch = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert_eq!(
            search,
            EmployeeSearch {
                name: Some("sarah".to_string()),
                joined_after: Some("2024-01-01".to_string()),
                ..EmployeeSearch::default()
            }
        );
    }

    #[test]
    fn new_employee_without_optionals_deserializes() {
        let new_employee: NewEmployee = serde_json::from_value(json!({
            "name": "Ana",
            "role": "Analyst",
            "department": "Finance",
            "city": "Lisbon",
            "email": "ana@example.com",
            "joinDate": "2024-05-01T09:30:00Z",
        }))
        .unwrap();

        assert_eq!(new_employee.phone, None);
        assert_eq!(new_employee.about, None);
        assert!(new_employee.validate().is_ok());
    }
}
