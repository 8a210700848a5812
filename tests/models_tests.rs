mod common;

#[cfg(test)]
pub mod models_tests {
    use serde_json::json;

    use super::common::*;

    use folio::models::*;

    #[test]
    fn hero_uses_camel_case_on_the_wire() {
        let body = json!({
            "uuid": "00000000-0000-0000-0000-000000000000",
            "title": "Hello, I'm Sam",
            "subtitle": "Backend Developer",
            "description": "I build services.",
            "isActive": true
        });

        let hero: Hero = serde_json::from_value(body).unwrap();

        assert_eq!(hero.uuid, get_seed_hero_0().uuid);
        assert!(hero.is_active);

        let back = serde_json::to_value(&hero).unwrap();
        assert_eq!(back["isActive"], json!(true));
        assert!(back.get("is_active").is_none());
    }

    #[test]
    fn hero_missing_active_flag_defaults_to_false() {
        let body = json!({
            "uuid": "00000000-0000-0000-0000-000000000002",
            "title": "Hey there",
            "subtitle": "Tinkerer",
            "description": "Draft"
        });

        let hero: Hero = serde_json::from_value(body).unwrap();

        assert!(!hero.is_active);
    }

    #[test]
    fn about_accepts_tech_stack_as_encoded_string() {
        let body = json!({
            "uuid": "00000000-0000-0000-0000-000000000010",
            "title": "About me",
            "subtitle": "Developer",
            "description": "Bio",
            "resumeLink": "https://example.com/resume.pdf",
            "techStack": r#"["Rust","Postgres"]"#,
            "profileImage": "/uploads/profile.png",
            "isActive": true
        });

        let about: About = serde_json::from_value(body).unwrap();

        assert_eq!(about.tech_stack.as_slice(), ["Rust", "Postgres"]);
        assert_eq!(about.profile_image.as_deref(), Some("/uploads/profile.png"));
    }

    #[test]
    fn about_tolerates_absent_optional_fields() {
        let body = json!({
            "uuid": "00000000-0000-0000-0000-000000000011",
            "title": "About me",
            "subtitle": "Developer",
            "description": "Bio"
        });

        let about: About = serde_json::from_value(body).unwrap();

        assert!(about.resume_link.is_none());
        assert!(about.tech_stack.is_empty());
        assert!(about.profile_image.is_none());
        assert!(!about.is_active);
    }

    #[test]
    fn skill_icon_slug_is_optional() {
        let body = json!({
            "uuid": "00000000-0000-0000-0000-000000000021",
            "name": "CSS",
            "category": "Frontend",
            "level": 40
        });

        let skill: Skill = serde_json::from_value(body).unwrap();

        assert_eq!(skill.level, get_seed_skill_1().level);
        assert!(skill.icon_slug.is_none());
    }

    #[test]
    fn project_serializes_urls_in_camel_case() {
        let back = serde_json::to_value(get_seed_project_0()).unwrap();

        assert_eq!(back["demoUrl"], json!("https://example.com"));
        assert_eq!(back["techStack"], json!(["Rust", "Actix"]));
        assert!(back.get("demo_url").is_none());
    }

    #[test]
    fn certificate_date_stays_opaque() {
        let body = json!({
            "uuid": "00000000-0000-0000-0000-000000000060",
            "title": "Rust Cert",
            "issuer": "Some Org",
            "date": "2024-03-01"
        });

        let cert: Certificate = serde_json::from_value(body).unwrap();

        assert_eq!(cert.date, "2024-03-01");
    }

    #[test]
    fn role_uses_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("admin"));
        assert_eq!(serde_json::to_value(Role::User).unwrap(), json!("user"));

        let role: Role = serde_json::from_value(json!("admin")).unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(role.to_string(), "admin");
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(serde_json::from_value::<Role>(json!("root")).is_err());
    }

    #[test]
    fn session_user_admin_check() {
        let body = json!({
            "uuid": "00000000-0000-0000-0000-000000000050",
            "userName": "admin",
            "email": "admin@test.com",
            "role": "admin"
        });

        let me: SessionUser = serde_json::from_value(body).unwrap();

        assert_eq!(me.user_name, get_seed_user_0().user_name);
        assert!(me.is_admin());
    }
}
