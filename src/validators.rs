//! Built-in validators.
//!
//! Every validator has the registry signature `(value, field, model) ->
//! messages` and reads its parameters (length bounds, numeric bounds,
//! pattern, choices) from the field descriptor. All validators except
//! `required` pass on blank values (null, empty string, empty array), so
//! optional fields only fail once the user has typed something.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::def::FieldDef;
use crate::traits::FormField;
use crate::values::FormValues;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s]+\.[^\s]+$").expect("url pattern is valid")
});

/// Whether a value counts as "not provided".
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

/// `required`: fails on blank values.
pub fn required(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) {
        vec![format!("{} is required", field.label())]
    } else {
        Vec::new()
    }
}

/// `min_length`: character count for strings, item count for arrays.
/// Bound comes from the field's options; no bound means pass.
pub fn min_length(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) {
        return Vec::new();
    }
    let Some(min) = field.length_bounds().0 else {
        return Vec::new();
    };
    match value {
        Value::String(s) if s.chars().count() < min => {
            vec![format!(
                "{} must be at least {min} characters",
                field.label()
            )]
        }
        Value::Array(items) if items.len() < min => {
            vec![format!(
                "{} must have at least {min} selections",
                field.label()
            )]
        }
        _ => Vec::new(),
    }
}

/// `max_length`: character count for strings, item count for arrays.
pub fn max_length(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) {
        return Vec::new();
    }
    let Some(max) = field.length_bounds().1 else {
        return Vec::new();
    };
    match value {
        Value::String(s) if s.chars().count() > max => {
            vec![format!("{} must be at most {max} characters", field.label())]
        }
        Value::Array(items) if items.len() > max => {
            vec![format!(
                "{} must have at most {max} selections",
                field.label()
            )]
        }
        _ => Vec::new(),
    }
}

/// `pattern`: the field's declared regex must match the string value.
/// An uncompilable pattern is reported as an error, never skipped.
pub fn pattern(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) {
        return Vec::new();
    }
    let Some(pattern) = field.pattern() else {
        return Vec::new();
    };
    let Some(text) = value.as_str() else {
        return vec![format!("{} must be a string", field.label())];
    };
    match Regex::new(pattern) {
        Ok(re) if re.is_match(text) => Vec::new(),
        Ok(_) => vec![format!("{} does not match the required pattern", field.label())],
        Err(_) => vec![format!(
            "{} has an invalid pattern in its schema",
            field.label()
        )],
    }
}

/// `min`: numeric lower bound from the field's options.
pub fn min(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) {
        return Vec::new();
    }
    let Some(min) = field.numeric_bounds().0 else {
        return Vec::new();
    };
    match value.as_f64() {
        Some(n) if n < min => vec![format!("{} must be at least {min}", field.label())],
        Some(_) => Vec::new(),
        None => vec![format!("{} must be a number", field.label())],
    }
}

/// `max`: numeric upper bound from the field's options.
pub fn max(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) {
        return Vec::new();
    }
    let Some(max) = field.numeric_bounds().1 else {
        return Vec::new();
    };
    match value.as_f64() {
        Some(n) if n > max => vec![format!("{} must be at most {max}", field.label())],
        Some(_) => Vec::new(),
        None => vec![format!("{} must be a number", field.label())],
    }
}

/// `number`: the value must be numeric.
pub fn number(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) || value.is_number() {
        Vec::new()
    } else {
        vec![format!("{} must be a number", field.label())]
    }
}

/// `integer`: the value must be a whole number.
pub fn integer(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) {
        return Vec::new();
    }
    match value.as_f64() {
        Some(n) if n.fract() == 0.0 => Vec::new(),
        Some(_) => vec![format!("{} must be an integer", field.label())],
        None => vec![format!("{} must be a number", field.label())],
    }
}

/// `email`: loose address shape check.
pub fn email(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) {
        return Vec::new();
    }
    let valid = value.as_str().is_some_and(|s| EMAIL_RE.is_match(s));
    if valid {
        Vec::new()
    } else {
        vec![format!("{} is not a valid email address", field.label())]
    }
}

/// `url`: http(s) URL shape check.
pub fn url(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) {
        return Vec::new();
    }
    let valid = value.as_str().is_some_and(|s| URL_RE.is_match(s));
    if valid {
        Vec::new()
    } else {
        vec![format!("{} is not a valid URL", field.label())]
    }
}

/// `one_of`: the value (or every element, for multi-selects) must appear
/// among the field's declared choices. Fields without choices pass.
pub fn one_of(value: &Value, field: &FieldDef, _values: &FormValues) -> Vec<String> {
    if is_blank(value) {
        return Vec::new();
    }
    let Some(choices) = field.choices() else {
        return Vec::new();
    };
    let allowed = |candidate: &Value| choices.iter().any(|c| &c.value == candidate);

    let ok = match value {
        Value::Array(items) => items.iter().all(allowed),
        other => allowed(other),
    };
    if ok {
        Vec::new()
    } else {
        vec![format!(
            "{} must be one of the available choices",
            field.label()
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::SelectChoice;
    use crate::types::{MultiSelectField, NumberField, SelectField, TextField};
    use serde_json::json;

    fn text_field(json_options: Value) -> FieldDef {
        serde_json::from_value(json!({
            "type": "text",
            "id": "Username",
            "options": json_options
        }))
        .unwrap()
    }

    #[test]
    fn required_flags_blank_values() {
        let field = FieldDef::Text(TextField::new("Name"));
        let model = FormValues::new();

        assert_eq!(
            required(&json!(""), &field, &model),
            vec!["Name is required"]
        );
        assert_eq!(
            required(&Value::Null, &field, &model),
            vec!["Name is required"]
        );
        assert_eq!(required(&json!([]), &field, &model), vec!["Name is required"]);
        assert!(required(&json!("Ada"), &field, &model).is_empty());
        assert!(required(&json!(0), &field, &model).is_empty());
        assert!(required(&json!(false), &field, &model).is_empty());
    }

    #[test]
    fn min_length_counts_chars() {
        let field = text_field(json!({"min_length": 3}));
        let model = FormValues::new();

        assert_eq!(
            min_length(&json!("ab"), &field, &model),
            vec!["Username must be at least 3 characters"]
        );
        assert!(min_length(&json!("abc"), &field, &model).is_empty());
        // Blank values are the required validator's business.
        assert!(min_length(&json!(""), &field, &model).is_empty());
    }

    #[test]
    fn min_length_counts_selections() {
        let field: FieldDef = serde_json::from_value(json!({
            "type": "multi_select",
            "id": "Tags",
            "min_selections": 2
        }))
        .unwrap();
        let model = FormValues::new();

        assert_eq!(
            min_length(&json!(["a"]), &field, &model),
            vec!["Tags must have at least 2 selections"]
        );
        assert!(min_length(&json!(["a", "b"]), &field, &model).is_empty());
    }

    #[test]
    fn max_length_bounds() {
        let field = text_field(json!({"max_length": 3}));
        let model = FormValues::new();

        assert_eq!(
            max_length(&json!("abcd"), &field, &model),
            vec!["Username must be at most 3 characters"]
        );
        assert!(max_length(&json!("abc"), &field, &model).is_empty());
    }

    #[test]
    fn unbounded_fields_pass_length_checks() {
        let field = FieldDef::Text(TextField::new("Free"));
        let model = FormValues::new();
        assert!(min_length(&json!("x"), &field, &model).is_empty());
        assert!(max_length(&json!("very long text"), &field, &model).is_empty());
    }

    #[test]
    fn pattern_matches_and_reports() {
        let field = text_field(json!({"pattern": "^[a-z]+$"}));
        let model = FormValues::new();

        assert!(pattern(&json!("abc"), &field, &model).is_empty());
        assert_eq!(
            pattern(&json!("Abc1"), &field, &model),
            vec!["Username does not match the required pattern"]
        );
    }

    #[test]
    fn invalid_pattern_fails_closed() {
        let field = text_field(json!({"pattern": "(unclosed"}));
        let model = FormValues::new();

        assert_eq!(
            pattern(&json!("anything"), &field, &model),
            vec!["Username has an invalid pattern in its schema"]
        );
    }

    #[test]
    fn numeric_bounds() {
        let field: FieldDef = serde_json::from_value(json!({
            "type": "number",
            "id": "Port",
            "options": {"min": 1.0, "max": 65535.0}
        }))
        .unwrap();
        let model = FormValues::new();

        assert_eq!(
            min(&json!(0), &field, &model),
            vec!["Port must be at least 1"]
        );
        assert_eq!(
            max(&json!(70000), &field, &model),
            vec!["Port must be at most 65535"]
        );
        assert!(min(&json!(8080), &field, &model).is_empty());
        assert!(max(&json!(8080), &field, &model).is_empty());
    }

    #[test]
    fn number_and_integer() {
        let field = FieldDef::Number(NumberField::new("Age"));
        let model = FormValues::new();

        assert!(number(&json!(3.5), &field, &model).is_empty());
        assert_eq!(
            number(&json!("abc"), &field, &model),
            vec!["Age must be a number"]
        );

        assert!(integer(&json!(3), &field, &model).is_empty());
        assert_eq!(
            integer(&json!(3.5), &field, &model),
            vec!["Age must be an integer"]
        );
        assert_eq!(
            integer(&json!("x"), &field, &model),
            vec!["Age must be a number"]
        );
    }

    #[test]
    fn email_and_url_shapes() {
        let field = FieldDef::Text(TextField::new("Contact"));
        let model = FormValues::new();

        assert!(email(&json!("ada@example.com"), &field, &model).is_empty());
        assert_eq!(
            email(&json!("not-an-email"), &field, &model),
            vec!["Contact is not a valid email address"]
        );

        assert!(url(&json!("https://example.com/x"), &field, &model).is_empty());
        assert_eq!(
            url(&json!("ftp://example.com"), &field, &model),
            vec!["Contact is not a valid URL"]
        );
    }

    #[test]
    fn one_of_checks_declared_choices() {
        let field = FieldDef::Select(
            SelectField::new("Region")
                .with_choice(SelectChoice::new("US", json!("us")))
                .with_choice(SelectChoice::new("EU", json!("eu"))),
        );
        let model = FormValues::new();

        assert!(one_of(&json!("us"), &field, &model).is_empty());
        assert_eq!(
            one_of(&json!("mars"), &field, &model),
            vec!["Region must be one of the available choices"]
        );
    }

    #[test]
    fn one_of_checks_every_selection() {
        let field = FieldDef::MultiSelect(
            MultiSelectField::new("Toppings")
                .with_choice(SelectChoice::new("Cheese", json!("cheese")))
                .with_choice(SelectChoice::new("Olives", json!("olives"))),
        );
        let model = FormValues::new();

        assert!(one_of(&json!(["cheese", "olives"]), &field, &model).is_empty());
        assert_eq!(
            one_of(&json!(["cheese", "pineapple"]), &field, &model),
            vec!["Toppings must be one of the available choices"]
        );
    }

    #[test]
    fn choiceless_fields_pass_one_of() {
        let field = FieldDef::Text(TextField::new("Free"));
        let model = FormValues::new();
        assert!(one_of(&json!("anything"), &field, &model).is_empty());
    }
}
