use uuid::Uuid;

use folio::models::*;

pub fn uuid_n(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn get_seed_hero_0() -> Hero {
    Hero {
        uuid: uuid_n(0),
        title: "Hello, I'm Sam".to_string(),
        subtitle: "Backend Developer".to_string(),
        description: "I build services.".to_string(),
        is_active: true,
    }
}

pub fn get_seed_hero_1() -> Hero {
    Hero {
        uuid: uuid_n(1),
        title: "Hi, I'm Sam".to_string(),
        subtitle: "Systems Developer".to_string(),
        description: "I build systems.".to_string(),
        is_active: false,
    }
}

pub fn get_seed_hero_2() -> Hero {
    Hero {
        uuid: uuid_n(2),
        title: "Hey there".to_string(),
        subtitle: "Tinkerer".to_string(),
        description: "Draft banner, never published.".to_string(),
        is_active: false,
    }
}

pub fn get_seed_about_0() -> About {
    About {
        uuid: uuid_n(0x10),
        title: "About me".to_string(),
        subtitle: "Developer from nowhere in particular".to_string(),
        description: "Ten years of shipping software.".to_string(),
        resume_link: Some("https://example.com/resume.pdf".to_string()),
        tech_stack: TechStack(vec!["Rust".to_string(), "Postgres".to_string()]),
        profile_image: Some("/uploads/profile.png".to_string()),
        is_active: true,
    }
}

pub fn get_seed_skill_0() -> Skill {
    Skill {
        uuid: uuid_n(0x20),
        name: "Rust".to_string(),
        category: "Backend".to_string(),
        level: 90,
        icon_slug: Some("rust".to_string()),
    }
}

pub fn get_seed_skill_1() -> Skill {
    Skill {
        uuid: uuid_n(0x21),
        name: "CSS".to_string(),
        category: "Frontend".to_string(),
        level: 40,
        icon_slug: None,
    }
}

pub fn get_seed_project_0() -> Project {
    Project {
        uuid: uuid_n(0x30),
        title: "Folio".to_string(),
        description: "Portfolio site".to_string(),
        category: "Web".to_string(),
        demo_url: Some("https://example.com".to_string()),
        github_url: None,
        tech_stack: TechStack(vec!["Rust".to_string(), "Actix".to_string()]),
        image: None,
    }
}

pub fn get_seed_feedback_0() -> Feedback {
    Feedback {
        uuid: uuid_n(0x40),
        name: "visitor".to_string(),
        comment: "Nice site".to_string(),
        rating: 4,
    }
}

pub fn get_seed_user_0() -> User {
    User {
        uuid: uuid_n(0x50),
        user_name: "admin".to_string(),
        email: "admin@test.com".to_string(),
        role: Role::Admin,
    }
}
