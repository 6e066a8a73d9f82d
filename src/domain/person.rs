use crate::validation::rules::length_between;
use crate::validation::Validator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a person that are not assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct CreatePersonRequest {
    pub name: String,
    pub surname: String,
}

impl CreatePersonRequest {
    pub fn validate(&self, v: &mut Validator) {
        v.check_with_rules("name", &self.name, &[&length_between(1, 20)]);
        v.check_with_rules("surname", &self.surname, &[&length_between(1, 20)]);
    }
}

/// Partial update. Empty strings and a missing age leave the stored value as is.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdatePersonRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub nationality: String,
}

impl UpdatePersonRequest {
    pub fn validate(&self, v: &mut Validator) {
        v.check_with_rules("name", &self.name, &[&length_between(0, 20)]);
        v.check_with_rules("surname", &self.surname, &[&length_between(0, 20)]);
        v.check_with_rules("gender", &self.gender, &[&length_between(0, 10)]);
        v.check_with_rules("nationality", &self.nationality, &[&length_between(0, 10)]);
        if let Some(age) = self.age {
            v.check(age >= 0, "age", "must not be negative");
        }
    }

    /// Copies the provided fields onto `person` and bumps `updated_at`.
    pub fn apply_to(&self, person: &mut Person, now: DateTime<Utc>) {
        if !self.name.is_empty() {
            person.name = self.name.clone();
        }
        if !self.surname.is_empty() {
            person.surname = self.surname.clone();
        }
        if !self.gender.is_empty() {
            person.gender = self.gender.clone();
        }
        if !self.nationality.is_empty() {
            person.nationality = self.nationality.clone();
        }
        if let Some(age) = self.age {
            person.age = age;
        }
        person.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn person() -> Person {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Person {
            id: 1,
            name: "Dmitriy".into(),
            surname: "Ushakov".into(),
            age: 42,
            gender: "male".into(),
            nationality: "RU".into(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn create_requires_both_names() {
        let req = CreatePersonRequest {
            name: String::new(),
            surname: "x".repeat(21),
        };
        let mut v = Validator::new();
        req.validate(&mut v);

        assert_eq!(v.error("name"), Some("length must be at least 1 characters"));
        assert_eq!(
            v.error("surname"),
            Some("length must not exceed 20 characters")
        );
    }

    #[test]
    fn empty_update_is_valid_and_only_touches_timestamp() {
        let req = UpdatePersonRequest::default();
        let mut v = Validator::new();
        req.validate(&mut v);
        assert!(v.valid());

        let mut p = person();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        req.apply_to(&mut p, now);

        assert_eq!(p.name, "Dmitriy");
        assert_eq!(p.age, 42);
        assert_eq!(p.updated_at, now);
        assert_ne!(p.created_at, now);
    }

    #[test]
    fn update_overwrites_provided_fields() {
        let req = UpdatePersonRequest {
            surname: "Petrov".into(),
            age: Some(0),
            nationality: "KZ".into(),
            ..Default::default()
        };
        let mut p = person();
        req.apply_to(&mut p, Utc::now());

        assert_eq!(p.name, "Dmitriy");
        assert_eq!(p.surname, "Petrov");
        assert_eq!(p.age, 0);
        assert_eq!(p.nationality, "KZ");
    }

    #[test]
    fn update_rejects_long_gender_and_negative_age() {
        let req = UpdatePersonRequest {
            gender: "g".repeat(11),
            age: Some(-1),
            ..Default::default()
        };
        let mut v = Validator::new();
        req.validate(&mut v);

        assert_eq!(
            v.error("gender"),
            Some("length must not exceed 10 characters")
        );
        assert_eq!(v.error("age"), Some("must not be negative"));
    }
}
