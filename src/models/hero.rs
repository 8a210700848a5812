use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list_ops::{Activatable, Keyed};

/// Headline banner shown on the public landing page. Exactly one hero may be
/// active at a time; the backend enforces the single-winner flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub uuid: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Keyed for Hero {
    fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl Activatable for Hero {
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
