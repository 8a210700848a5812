#[cfg(test)]
pub mod api_tests {
    use serde_json::json;

    use folio::api::*;

    #[test]
    fn content_resources_report_errors_under_error() {
        for res in [HERO, ABOUT, SKILLS, PROJECTS, CERTIFICATES, FEEDBACK] {
            assert_eq!(res.error_field, ErrorField::Error, "{}", res.path);
        }
    }

    #[test]
    fn user_resource_reports_errors_under_msg() {
        assert_eq!(USERS.error_field, ErrorField::Msg);
    }

    #[test]
    fn update_verbs_match_the_backend_contract() {
        assert_eq!(HERO.update, UpdateMethod::Patch);
        assert_eq!(ABOUT.update, UpdateMethod::Patch);
        assert_eq!(USERS.update, UpdateMethod::Patch);

        assert_eq!(SKILLS.update, UpdateMethod::Put);
        assert_eq!(PROJECTS.update, UpdateMethod::Put);
        assert_eq!(CERTIFICATES.update, UpdateMethod::Put);
    }

    #[test]
    fn resource_paths_match_the_backend_routes() {
        assert_eq!(HERO.path, "/hero");
        assert_eq!(ABOUT.path, "/about");
        assert_eq!(SKILLS.path, "/skills");
        assert_eq!(PROJECTS.path, "/project");
        assert_eq!(CERTIFICATES.path, "/certificate");
        assert_eq!(FEEDBACK.path, "/feedback");
        assert_eq!(USERS.path, "/users");
    }

    #[test]
    fn extract_reads_only_the_designated_field() {
        let body = json!({"error": "boom", "msg": "nope"});

        assert_eq!(ErrorField::Error.extract(&body).as_deref(), Some("boom"));
        assert_eq!(ErrorField::Msg.extract(&body).as_deref(), Some("nope"));
    }

    #[test]
    fn extract_ignores_non_string_and_missing_fields() {
        assert!(ErrorField::Error.extract(&json!({"error": 500})).is_none());
        assert!(ErrorField::Error.extract(&json!({"msg": "other family"})).is_none());
        assert!(ErrorField::Msg.extract(&json!({})).is_none());
    }

    #[test]
    fn fallback_message_names_the_resource() {
        assert_eq!(HERO.fallback_message("update"), "Failed to update hero");
        assert_eq!(USERS.fallback_message("delete"), "Failed to delete user");
    }
}
