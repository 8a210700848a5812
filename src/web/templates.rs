use askama::Template;

use folio::models::{
    About, Certificate, Feedback, Hero, Project, Skill, User,
};

/// One-shot banner shown at the top of a page. Mirrors the original client's
/// blocking alert: either a success notice or an error, never both.
#[derive(Debug, Clone, Default)]
pub struct Flash {
    pub notice: String,
    pub error: String,
}

impl Flash {
    pub fn none() -> Self {
        Flash::default()
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Flash {
            notice: message.into(),
            error: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Flash {
            notice: String::new(),
            error: message.into(),
        }
    }

    pub fn from_query(notice: Option<String>, error: Option<String>) -> Self {
        Flash {
            notice: notice.unwrap_or_default(),
            error: error.unwrap_or_default(),
        }
    }
}

// --- public site views ---

/// Hero copy with the hardcoded fallback used when the fetch fails.
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

impl Default for HeroView {
    fn default() -> Self {
        HeroView {
            title: "Hello, I'm".to_string(),
            subtitle: "Web Developer".to_string(),
            description: "Passionate about building fast, functional, and beautiful websites. \
                          Let's turn your vision into reality."
                .to_string(),
        }
    }
}

impl From<Hero> for HeroView {
    fn from(hero: Hero) -> Self {
        HeroView {
            title: hero.title,
            subtitle: hero.subtitle,
            description: hero.description,
        }
    }
}

pub struct AboutView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub resume_link: String,
    pub tech_stack: Vec<String>,
    pub profile_image: String,
}

impl Default for AboutView {
    fn default() -> Self {
        AboutView {
            title: "About Me".to_string(),
            subtitle: "Developer".to_string(),
            description: "I build web applications end to end.".to_string(),
            resume_link: String::new(),
            tech_stack: Vec::new(),
            profile_image: String::new(),
        }
    }
}

impl From<About> for AboutView {
    fn from(about: About) -> Self {
        AboutView {
            title: about.title,
            subtitle: about.subtitle,
            description: about.description,
            resume_link: about.resume_link.unwrap_or_default(),
            tech_stack: about.tech_stack.0,
            profile_image: about.profile_image.unwrap_or_default(),
        }
    }
}

pub struct SkillView {
    pub name: String,
    pub level: i32,
    pub icon_slug: String,
}

impl From<Skill> for SkillView {
    fn from(skill: Skill) -> Self {
        SkillView {
            name: skill.name,
            level: skill.level,
            icon_slug: skill.icon_slug.unwrap_or_default(),
        }
    }
}

pub struct SkillGroupView {
    pub category: String,
    pub skills: Vec<SkillView>,
}

pub struct ProjectView {
    pub title: String,
    pub description: String,
    pub category: String,
    pub demo_url: String,
    pub github_url: String,
    pub tech_stack: Vec<String>,
    pub image: String,
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        ProjectView {
            title: project.title,
            description: project.description,
            category: project.category,
            demo_url: project.demo_url.unwrap_or_default(),
            github_url: project.github_url.unwrap_or_default(),
            tech_stack: project.tech_stack.0,
            image: project.image.unwrap_or_default(),
        }
    }
}

pub struct CertificateView {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub credential_url: String,
    pub image: String,
}

impl From<Certificate> for CertificateView {
    fn from(cert: Certificate) -> Self {
        CertificateView {
            title: cert.title,
            issuer: cert.issuer,
            date: cert.date,
            credential_url: cert.credential_url.unwrap_or_default(),
            image: cert.image.unwrap_or_default(),
        }
    }
}

pub struct FeedbackView {
    pub name: String,
    pub comment: String,
    /// Pre-rendered star row, e.g. "★★★★☆".
    pub stars: String,
}

impl From<Feedback> for FeedbackView {
    fn from(feedback: Feedback) -> Self {
        let rating = feedback.rating.clamp(0, 5) as usize;
        let mut stars = "★".repeat(rating);
        stars.push_str(&"☆".repeat(5 - rating));
        FeedbackView {
            name: feedback.name,
            comment: feedback.comment,
            stars,
        }
    }
}

#[derive(Template)]
#[template(path = "public/index.html")]
pub struct PublicIndexTemplate {
    pub hero: HeroView,
    pub about: AboutView,
    pub skill_groups: Vec<SkillGroupView>,
    pub skills_failed: bool,
    pub projects: Vec<ProjectView>,
    pub projects_failed: bool,
    pub certificates: Vec<CertificateView>,
    pub certificates_failed: bool,
    pub feedbacks: Vec<FeedbackView>,
    pub logged_in: bool,
    pub flash: Flash,
}

// --- auth pages ---

#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub flash: Flash,
}

#[derive(Template)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub flash: Flash,
}

// --- admin console ---

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub user_name: String,
    pub flash: Flash,
}

pub struct HeroRow {
    pub uuid: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub is_active: bool,
}

impl From<Hero> for HeroRow {
    fn from(hero: Hero) -> Self {
        HeroRow {
            uuid: hero.uuid.to_string(),
            title: hero.title,
            subtitle: hero.subtitle,
            description: hero.description,
            is_active: hero.is_active,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/hero.html")]
pub struct AdminHeroTemplate {
    pub user_name: String,
    pub heroes: Vec<HeroRow>,
    pub edit: Option<HeroRow>,
    pub flash: Flash,
}

pub struct AboutRow {
    pub uuid: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub resume_link: String,
    /// Seeded through the normalizer; comma-joined for the edit input.
    pub tech_stack_csv: String,
    pub profile_image: String,
    pub is_active: bool,
}

impl From<About> for AboutRow {
    fn from(about: About) -> Self {
        AboutRow {
            uuid: about.uuid.to_string(),
            title: about.title,
            subtitle: about.subtitle,
            description: about.description,
            resume_link: about.resume_link.unwrap_or_default(),
            tech_stack_csv: about.tech_stack.to_csv(),
            profile_image: about.profile_image.unwrap_or_default(),
            is_active: about.is_active,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/about.html")]
pub struct AdminAboutTemplate {
    pub user_name: String,
    pub abouts: Vec<AboutRow>,
    pub edit: Option<AboutRow>,
    pub flash: Flash,
}

pub struct SkillRow {
    pub uuid: String,
    pub name: String,
    pub category: String,
    pub level: i32,
    pub icon_slug: String,
}

impl From<Skill> for SkillRow {
    fn from(skill: Skill) -> Self {
        SkillRow {
            uuid: skill.uuid.to_string(),
            name: skill.name,
            category: skill.category,
            level: skill.level,
            icon_slug: skill.icon_slug.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/skills.html")]
pub struct AdminSkillsTemplate {
    pub user_name: String,
    pub skills: Vec<SkillRow>,
    pub edit: Option<SkillRow>,
    pub flash: Flash,
}

pub struct ProjectRow {
    pub uuid: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub demo_url: String,
    pub github_url: String,
    pub tech_stack_csv: String,
    pub image: String,
}

impl From<Project> for ProjectRow {
    fn from(project: Project) -> Self {
        ProjectRow {
            uuid: project.uuid.to_string(),
            title: project.title,
            description: project.description,
            category: project.category,
            demo_url: project.demo_url.unwrap_or_default(),
            github_url: project.github_url.unwrap_or_default(),
            tech_stack_csv: project.tech_stack.to_csv(),
            image: project.image.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/projects.html")]
pub struct AdminProjectsTemplate {
    pub user_name: String,
    pub projects: Vec<ProjectRow>,
    pub edit: Option<ProjectRow>,
    pub flash: Flash,
}

pub struct CertificateRow {
    pub uuid: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub credential_url: String,
    pub image: String,
}

impl From<Certificate> for CertificateRow {
    fn from(cert: Certificate) -> Self {
        CertificateRow {
            uuid: cert.uuid.to_string(),
            title: cert.title,
            issuer: cert.issuer,
            date: cert.date,
            credential_url: cert.credential_url.unwrap_or_default(),
            image: cert.image.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/certificates.html")]
pub struct AdminCertificatesTemplate {
    pub user_name: String,
    pub certificates: Vec<CertificateRow>,
    pub edit: Option<CertificateRow>,
    pub flash: Flash,
}

pub struct UserRow {
    pub uuid: String,
    pub user_name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        UserRow {
            uuid: user.uuid.to_string(),
            user_name: user.user_name,
            email: user.email,
            role: user.role.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/users.html")]
pub struct AdminUsersTemplate {
    pub user_name: String,
    pub users: Vec<UserRow>,
    pub edit: Option<UserRow>,
    pub flash: Flash,
}
