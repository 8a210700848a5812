#[cfg(test)]
pub mod tech_stack_tests {
    use serde_json::{json, Value};

    use folio::models::{normalize_tech_stack, TechStack};

    #[test]
    fn array_is_trimmed_and_filtered() {
        let value = json!(["Rust", "  Actix ", "", "   "]);

        assert_eq!(normalize_tech_stack(&value), vec!["Rust", "Actix"]);
    }

    #[test]
    fn json_encoded_string_is_parsed_as_array() {
        let value = Value::String(r#"["Rust","Actix","Postgres"]"#.to_string());

        assert_eq!(
            normalize_tech_stack(&value),
            vec!["Rust", "Actix", "Postgres"]
        );
    }

    #[test]
    fn plain_string_falls_back_to_csv() {
        let value = Value::String("Rust, Actix , ,Postgres".to_string());

        assert_eq!(
            normalize_tech_stack(&value),
            vec!["Rust", "Actix", "Postgres"]
        );
    }

    #[test]
    fn non_string_array_items_are_skipped() {
        let value = json!(["Rust", 42, null, "Actix"]);

        assert_eq!(normalize_tech_stack(&value), vec!["Rust", "Actix"]);
    }

    #[test]
    fn unrecognized_shapes_yield_empty() {
        assert!(normalize_tech_stack(&Value::Null).is_empty());
        assert!(normalize_tech_stack(&json!(42)).is_empty());
        assert!(normalize_tech_stack(&json!({"techStack": ["Rust"]})).is_empty());
    }

    #[test]
    fn deserialize_accepts_all_three_wire_shapes() {
        let from_array: TechStack = serde_json::from_value(json!(["Rust", "Actix"])).unwrap();
        let from_encoded: TechStack =
            serde_json::from_value(json!(r#"["Rust","Actix"]"#)).unwrap();
        let from_csv: TechStack = serde_json::from_value(json!("Rust, Actix")).unwrap();

        assert_eq!(from_array, from_encoded);
        assert_eq!(from_array, from_csv);
        assert_eq!(from_array.as_slice(), ["Rust", "Actix"]);
    }

    #[test]
    fn serialize_always_emits_an_array() {
        let stack = TechStack(vec!["Rust".to_string(), "Actix".to_string()]);

        assert_eq!(serde_json::to_value(&stack).unwrap(), json!(["Rust", "Actix"]));
    }

    #[test]
    fn csv_round_trip_through_edit_form() {
        let stack = TechStack::from_input(" Rust , Actix,,Postgres ");

        assert_eq!(stack.to_csv(), "Rust, Actix, Postgres");
        assert_eq!(TechStack::from_input(&stack.to_csv()), stack);
    }
}
