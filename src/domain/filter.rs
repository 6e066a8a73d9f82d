//! Listing constraints parsed from untrusted query parameters.

use crate::validation::rules::integer;
use crate::validation::Validator;

/// Optional equality filters plus pagination for `GET /people`.
///
/// Empty parameters count as absent. Integer-valued fields only hold values
/// that passed validation, so a `Filter` can always be rendered; callers still
/// check the [`Validator`] and reject the request before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
}

/// First value for `key`; empty counts as absent.
fn lookup<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

fn parse_integer(field: &str, raw: &str, v: &mut Validator) -> Option<i64> {
    // Range check keeps the value bindable as BIGINT.
    if v.check_with_rules(field, raw, &[&integer(0), &integer(64)]) {
        raw.parse().ok()
    } else {
        None
    }
}

/// Like [`parse_integer`], but LIMIT and OFFSET also reject negatives.
fn parse_page_bound(field: &str, raw: &str, v: &mut Validator) -> Option<i64> {
    let n = parse_integer(field, raw, v)?;
    v.check(n >= 0, field, "must not be negative");
    (n >= 0).then_some(n)
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(params: &[(String, String)], v: &mut Validator) -> Self {
        let text = |key: &str| lookup(params, key).map(str::to_owned);

        Self {
            name: text("name"),
            surname: text("surname"),
            gender: text("gender"),
            nationality: text("nationality"),
            age: lookup(params, "age").and_then(|raw| parse_integer("age", raw, v)),
            limit: lookup(params, "limit").and_then(|raw| parse_page_bound("limit", raw, v)),
            offset: lookup(params, "offset").and_then(|raw| parse_page_bound("offset", raw, v)),
        }
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    pub fn offset(&self) -> Option<i64> {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_params_mean_no_constraints() {
        let mut v = Validator::new();
        let filter = Filter::parse(&[], &mut v);

        assert!(v.valid());
        assert_eq!(filter, Filter::new());
    }

    #[test]
    fn empty_values_are_not_constraints() {
        let mut v = Validator::new();
        let filter = Filter::parse(
            &params(&[("name", ""), ("age", ""), ("limit", ""), ("offset", "")]),
            &mut v,
        );

        assert!(v.valid());
        assert_eq!(filter, Filter::new());
    }

    #[test]
    fn every_field_is_picked_up() {
        let mut v = Validator::new();
        let filter = Filter::parse(
            &params(&[
                ("offset", "40"),
                ("nationality", "RU"),
                ("gender", "male"),
                ("age", "-3"),
                ("surname", "Ushakov"),
                ("name", "Dmitriy"),
                ("limit", "0"),
            ]),
            &mut v,
        );

        assert!(v.valid());
        assert_eq!(filter.name.as_deref(), Some("Dmitriy"));
        assert_eq!(filter.surname.as_deref(), Some("Ushakov"));
        assert_eq!(filter.age, Some(-3));
        assert_eq!(filter.gender.as_deref(), Some("male"));
        assert_eq!(filter.nationality.as_deref(), Some("RU"));
        assert_eq!(filter.limit(), Some(0));
        assert_eq!(filter.offset(), Some(40));
    }

    #[test]
    fn invalid_age_is_reported() {
        let mut v = Validator::new();
        let filter = Filter::parse(&params(&[("age", "abc")]), &mut v);

        assert!(!v.valid());
        assert_eq!(v.error("age"), Some("must be a valid integer"));
        assert_eq!(filter.age, None);
    }

    #[test]
    fn every_invalid_field_is_reported_at_once() {
        let mut v = Validator::new();
        Filter::parse(
            &params(&[("age", "1.5"), ("limit", "ten"), ("offset", "+3")]),
            &mut v,
        );

        assert_eq!(v.errors().len(), 3);
        for field in ["age", "limit", "offset"] {
            assert_eq!(v.error(field), Some("must be a valid integer"));
        }
    }

    #[test]
    fn negative_pagination_is_rejected() {
        let mut v = Validator::new();
        let filter = Filter::parse(&params(&[("limit", "-1"), ("offset", "-5")]), &mut v);

        assert!(!v.valid());
        assert_eq!(v.error("limit"), Some("must not be negative"));
        assert_eq!(v.error("offset"), Some("must not be negative"));
        assert_eq!(filter.limit(), None);
        assert_eq!(filter.offset(), None);
    }

    #[rstest]
    #[case("limit")]
    #[case("offset")]
    #[case("age")]
    fn integers_beyond_bigint_are_rejected(#[case] field: &str) {
        let mut v = Validator::new();
        Filter::parse(&params(&[(field, "99999999999999999999")]), &mut v);

        assert_eq!(
            v.error(field),
            Some("number is out of range for a 64 bit integer")
        );
    }

    #[test]
    fn first_duplicate_wins() {
        let mut v = Validator::new();
        let filter = Filter::parse(
            &params(&[("gender", "female"), ("gender", "male")]),
            &mut v,
        );
        assert_eq!(filter.gender.as_deref(), Some("female"));
    }

    #[test]
    fn empty_first_duplicate_hides_later_value() {
        let mut v = Validator::new();
        let filter = Filter::parse(&params(&[("name", ""), ("name", "Alice")]), &mut v);
        assert_eq!(filter.name, None);
    }
}
