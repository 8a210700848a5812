use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list_ops::{Activatable, Keyed};
use super::tech_stack::TechStack;

/// Biography section record. Like [`super::Hero`], a single entry carries the
/// active flag and is the one rendered publicly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub uuid: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub resume_link: Option<String>,
    #[serde(default)]
    pub tech_stack: TechStack,
    /// URL of the uploaded profile image, served by the backend.
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Keyed for About {
    fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl Activatable for About {
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
