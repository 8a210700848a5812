use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list_ops::Keyed;
use super::tech_stack::TechStack;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub uuid: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub tech_stack: TechStack,
    #[serde(default)]
    pub image: Option<String>,
}

impl Keyed for Project {
    fn uuid(&self) -> Uuid {
        self.uuid
    }
}
