use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use serde::Deserialize;
use serde_json::{json, Value};

use folio::common::{passwords_match, rating, required, skill_level};
use folio::models::TechStack;

/// Banner codes passed between redirects.
#[derive(Deserialize)]
pub struct FlashQuery {
    pub notice: Option<String>,
    pub error: Option<String>,
}

// --- auth ---

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), String> {
        required("Email", &self.email)?;
        required("Password", &self.password)
    }
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), String> {
        required("Name", &self.user_name)?;
        required("Email", &self.email)?;
        required("Password", &self.password)?;
        passwords_match(&self.password, &self.confirm_password)
    }
}

// --- public feedback ---

#[derive(Deserialize)]
pub struct FeedbackForm {
    pub comment: String,
    #[serde(default)]
    pub rating: String,
}

impl FeedbackForm {
    /// Validated `(comment, rating)` pair; runs before any network call, so
    /// a zero or missing rating never reaches the backend.
    pub fn validate(&self) -> Result<(String, i32), String> {
        required("Comment", &self.comment)?;
        let stars = rating(&self.rating)?;
        Ok((self.comment.trim().to_string(), stars))
    }
}

// --- hero ---

#[derive(Deserialize)]
pub struct HeroForm {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Checkbox: present ("on") when ticked, absent otherwise.
    pub is_active: Option<String>,
}

impl HeroForm {
    pub fn validate(&self) -> Result<(), String> {
        required("Title", &self.title)?;
        required("Subtitle", &self.subtitle)?;
        required("Description", &self.description)
    }

    pub fn payload(&self) -> Value {
        json!({
            "title": self.title.trim(),
            "subtitle": self.subtitle.trim(),
            "description": self.description.trim(),
            "isActive": self.is_active.is_some(),
        })
    }
}

// --- skill ---

#[derive(Deserialize)]
pub struct SkillForm {
    pub name: String,
    pub category: String,
    pub level: String,
    #[serde(default)]
    pub icon_slug: String,
}

impl SkillForm {
    /// Returns the parsed level so `payload` never re-parses.
    pub fn validate(&self) -> Result<i32, String> {
        required("Name", &self.name)?;
        required("Category", &self.category)?;
        skill_level(&self.level)
    }

    pub fn payload(&self, level: i32) -> Value {
        let mut body = json!({
            "name": self.name.trim(),
            "category": self.category.trim(),
            "level": level,
        });
        let slug = self.icon_slug.trim();
        if !slug.is_empty() {
            body["iconSlug"] = Value::String(slug.to_string());
        }
        body
    }
}

// --- user (admin console) ---

#[derive(Deserialize)]
pub struct UserCreateForm {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

impl UserCreateForm {
    pub fn validate(&self) -> Result<(), String> {
        required("Name", &self.user_name)?;
        required("Email", &self.email)?;
        required("Password", &self.password)?;
        passwords_match(&self.password, &self.confirm_password)?;
        validate_role(&self.role)
    }

    pub fn payload(&self) -> Value {
        json!({
            "userName": self.user_name.trim(),
            "email": self.email.trim(),
            "password": self.password,
            "role": self.role,
        })
    }
}

#[derive(Deserialize)]
pub struct UserUpdateForm {
    pub user_name: String,
    pub email: String,
    pub role: String,
    /// Optional; empty means "keep the current password".
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl UserUpdateForm {
    pub fn validate(&self) -> Result<(), String> {
        required("Name", &self.user_name)?;
        required("Email", &self.email)?;
        validate_role(&self.role)?;
        if !self.password.is_empty() {
            passwords_match(&self.password, &self.confirm_password)?;
        }
        Ok(())
    }

    pub fn payload(&self) -> Value {
        let mut body = json!({
            "userName": self.user_name.trim(),
            "email": self.email.trim(),
            "role": self.role,
        });
        if !self.password.is_empty() {
            body["password"] = Value::String(self.password.clone());
        }
        body
    }
}

fn validate_role(role: &str) -> Result<(), String> {
    match role {
        "user" | "admin" => Ok(()),
        _ => Err("Role must be either user or admin".to_string()),
    }
}

// --- multipart entities (About / Project / Certificate) ---

#[derive(MultipartForm)]
pub struct AboutForm {
    pub title: Text<String>,
    pub subtitle: Text<String>,
    pub description: Text<String>,
    pub resume_link: Option<Text<String>>,
    /// Comma-separated tag input, normalized before upload.
    pub tech_stack: Option<Text<String>>,
    pub is_active: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}

impl AboutForm {
    /// Create requires a profile image; editing keeps the stored one when no
    /// replacement is uploaded.
    pub fn validate(&self, image_required: bool) -> Result<(), String> {
        required("Title", &self.title)?;
        required("Subtitle", &self.subtitle)?;
        required("Description", &self.description)?;
        if image_required && self.image.is_none() {
            return Err("Profile image is required".to_string());
        }
        Ok(())
    }

    pub fn to_backend_form(&self) -> Result<reqwest::multipart::Form, String> {
        let tech_stack = TechStack::from_input(
            self.tech_stack.as_ref().map(|t| t.as_str()).unwrap_or(""),
        );

        let mut form = reqwest::multipart::Form::new()
            .text("title", self.title.trim().to_string())
            .text("subtitle", self.subtitle.trim().to_string())
            .text("description", self.description.trim().to_string())
            // The backend stores the stack as a JSON-encoded string.
            .text(
                "techStack",
                serde_json::to_string(tech_stack.as_slice()).unwrap_or_default(),
            )
            .text("isActive", bool_text(self.is_active.is_some()));

        if let Some(link) = &self.resume_link {
            if !link.trim().is_empty() {
                form = form.text("resumeLink", link.trim().to_string());
            }
        }
        if let Some(file) = &self.image {
            form = form.part("image", file_part(file)?);
        }

        Ok(form)
    }
}

#[derive(MultipartForm)]
pub struct ProjectForm {
    pub title: Text<String>,
    pub description: Text<String>,
    pub category: Text<String>,
    pub demo_url: Option<Text<String>>,
    pub github_url: Option<Text<String>>,
    pub tech_stack: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}

impl ProjectForm {
    pub fn validate(&self) -> Result<(), String> {
        required("Title", &self.title)?;
        required("Description", &self.description)?;
        required("Category", &self.category)
    }

    pub fn to_backend_form(&self) -> Result<reqwest::multipart::Form, String> {
        let tech_stack = TechStack::from_input(
            self.tech_stack.as_ref().map(|t| t.as_str()).unwrap_or(""),
        );

        let mut form = reqwest::multipart::Form::new()
            .text("title", self.title.trim().to_string())
            .text("description", self.description.trim().to_string())
            .text("category", self.category.trim().to_string())
            .text(
                "techStack",
                serde_json::to_string(tech_stack.as_slice()).unwrap_or_default(),
            );

        if let Some(url) = &self.demo_url {
            if !url.trim().is_empty() {
                form = form.text("demoUrl", url.trim().to_string());
            }
        }
        if let Some(url) = &self.github_url {
            if !url.trim().is_empty() {
                form = form.text("githubUrl", url.trim().to_string());
            }
        }
        if let Some(file) = &self.image {
            form = form.part("image", file_part(file)?);
        }

        Ok(form)
    }
}

#[derive(MultipartForm)]
pub struct CertificateForm {
    pub title: Text<String>,
    pub issuer: Text<String>,
    pub date: Text<String>,
    pub credential_url: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}

impl CertificateForm {
    pub fn validate(&self) -> Result<(), String> {
        required("Title", &self.title)?;
        required("Issuer", &self.issuer)?;
        required("Date", &self.date)
    }

    pub fn to_backend_form(&self) -> Result<reqwest::multipart::Form, String> {
        let mut form = reqwest::multipart::Form::new()
            .text("title", self.title.trim().to_string())
            .text("issuer", self.issuer.trim().to_string())
            .text("date", self.date.trim().to_string());

        if let Some(url) = &self.credential_url {
            if !url.trim().is_empty() {
                form = form.text("credentialUrl", url.trim().to_string());
            }
        }
        if let Some(file) = &self.image {
            form = form.part("image", file_part(file)?);
        }

        Ok(form)
    }
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Re-packages an uploaded temp file into a reqwest multipart part for
/// forwarding to the backend.
fn file_part(file: &TempFile) -> Result<reqwest::multipart::Part, String> {
    let bytes = std::fs::read(file.file.path())
        .map_err(|e| format!("Could not read uploaded file: {e}"))?;

    let mut part = reqwest::multipart::Part::bytes(bytes).file_name(
        file.file_name
            .clone()
            .unwrap_or_else(|| "upload".to_string()),
    );

    if let Some(mime) = &file.content_type {
        part = part
            .mime_str(mime.essence_str())
            .map_err(|e| format!("Invalid upload content type: {e}"))?;
    }

    Ok(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill_form(name: &str, category: &str, level: &str) -> SkillForm {
        SkillForm {
            name: name.to_string(),
            category: category.to_string(),
            level: level.to_string(),
            icon_slug: String::new(),
        }
    }

    #[test]
    fn skill_level_boundaries_accepted() {
        assert_eq!(skill_form("Rust", "Backend", "1").validate(), Ok(1));
        assert_eq!(skill_form("Rust", "Backend", "100").validate(), Ok(100));
    }

    #[test]
    fn skill_level_out_of_range_rejected() {
        assert!(skill_form("Rust", "Backend", "0").validate().is_err());
        assert!(skill_form("Rust", "Backend", "101").validate().is_err());
        assert!(skill_form("Rust", "Backend", "lots").validate().is_err());
    }

    #[test]
    fn skill_missing_required_field_rejected() {
        assert!(skill_form("", "Backend", "50").validate().is_err());
        assert!(skill_form("Rust", "   ", "50").validate().is_err());
    }

    #[test]
    fn skill_payload_skips_empty_icon_slug() {
        let form = skill_form("Rust", "Backend", "90");
        let body = form.payload(90);
        assert!(body.get("iconSlug").is_none());
        assert_eq!(body["level"], 90);
    }

    #[test]
    fn hero_payload_uses_camel_case_active_flag() {
        let form = HeroForm {
            title: " Hi ".to_string(),
            subtitle: "Dev".to_string(),
            description: "Bio".to_string(),
            is_active: None,
        };
        let body = form.payload();
        assert_eq!(body["title"], "Hi");
        assert_eq!(body["isActive"], false);
    }

    #[test]
    fn feedback_zero_rating_blocked() {
        let form = FeedbackForm {
            comment: "Nice site".to_string(),
            rating: "0".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn feedback_valid_rating_accepted() {
        let form = FeedbackForm {
            comment: "Nice site".to_string(),
            rating: "5".to_string(),
        };
        assert_eq!(form.validate(), Ok(("Nice site".to_string(), 5)));
    }

    #[test]
    fn register_password_mismatch_rejected() {
        let form = RegisterForm {
            user_name: "dina".to_string(),
            email: "dina@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn user_update_without_password_skips_confirmation() {
        let form = UserUpdateForm {
            user_name: "dina".to_string(),
            email: "dina@example.com".to_string(),
            role: "admin".to_string(),
            password: String::new(),
            confirm_password: String::new(),
        };
        assert!(form.validate().is_ok());
        assert!(form.payload().get("password").is_none());
    }

    #[test]
    fn unknown_role_rejected() {
        let form = UserCreateForm {
            user_name: "dina".to_string(),
            email: "dina@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
            role: "owner".to_string(),
        };
        assert!(form.validate().is_err());
    }
}
