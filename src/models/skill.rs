use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list_ops::Keyed;

pub const SKILL_LEVEL_MIN: i32 = 1;
pub const SKILL_LEVEL_MAX: i32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub uuid: Uuid,
    pub name: String,
    pub category: String,
    /// Proficiency within [1, 100].
    pub level: i32,
    #[serde(default)]
    pub icon_slug: Option<String>,
}

impl Keyed for Skill {
    fn uuid(&self) -> Uuid {
        self.uuid
    }
}
