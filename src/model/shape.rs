use serde_json::Value;

/// Determines if a data value has the provided shape.
///
/// At any level, the value in `data` and in `shape` must have the same JSON
/// type. An object has the same shape if all its values have the same shape
/// as the first value in `shape`; the number of entries and the key names
/// are not relevant. An array has the same shape if all its items have the same
/// shape as the first item in `shape`. Any other value simply has to have
/// the same type. If `allow_empty` is set, objects and arrays in `data`
/// pass even when they are empty.
pub fn has_shape(data: &Value, shape: &Value, allow_empty: bool) -> bool {
    match (data, shape) {
        (Value::Object(data_map), Value::Object(shape_map)) => {
            let Some((_, shape_value)) = shape_map.iter().next() else {
                return allow_empty && data_map.is_empty();
            };
            (allow_empty || !data_map.is_empty())
                && data_map
                    .values()
                    .all(|value| has_shape(value, shape_value, allow_empty))
        }
        (Value::Array(data_items), Value::Array(shape_items)) => {
            let Some(shape_item) = shape_items.first() else {
                return allow_empty && data_items.is_empty();
            };
            (allow_empty || !data_items.is_empty())
                && data_items
                    .iter()
                    .all(|item| has_shape(item, shape_item, allow_empty))
        }
        (Value::Null, Value::Null) => true,
        (Value::Bool(_), Value::Bool(_)) => true,
        (Value::Number(_), Value::Number(_)) => true,
        (Value::String(_), Value::String(_)) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalars_match_on_type_only() {
        assert!(has_shape(&json!("github"), &json!(""), false));
        assert!(has_shape(&json!(42), &json!(0), false));
        assert!(has_shape(&json!(true), &json!(false), false));
        assert!(has_shape(&json!(null), &json!(null), false));
        assert!(!has_shape(&json!("github"), &json!(0), false));
    }

    #[test]
    fn object_matches_when_all_entries_match_first_shape_entry() {
        let data = json!({"key": "github", "name": "GitHub"});
        let shape = json!({"": ""});

        assert!(has_shape(&data, &shape, false));
    }

    #[test]
    fn object_fails_when_one_value_has_wrong_type() {
        let data = json!({"key": "github", "required": true});
        let shape = json!({"": ""});

        assert!(!has_shape(&data, &shape, false));
    }

    #[test]
    fn array_matches_when_all_items_match_first_shape_item() {
        let data = json!([{"name": "a"}, {"label": "b"}]);
        let shape = json!([{"": ""}]);

        assert!(has_shape(&data, &shape, false));
    }

    #[test]
    fn empty_containers_fail_unless_allowed() {
        assert!(!has_shape(&json!([]), &json!([0]), false));
        assert!(has_shape(&json!([]), &json!([0]), true));
        assert!(!has_shape(&json!({}), &json!({"": 0}), false));
        assert!(has_shape(&json!({}), &json!({"": 0}), true));
    }

    #[test]
    fn nested_descriptor_shape_matches() {
        let data = json!({
            "config": [
                {"name": "name", "label": "Repository Name"},
                {"name": "token", "label": "API Token"},
            ],
        });
        let shape = json!({"": [{"": ""}]});

        assert!(has_shape(&data, &shape, false));
    }
}
