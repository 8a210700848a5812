use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list_ops::Keyed;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub uuid: Uuid,
    pub title: String,
    pub issuer: String,
    /// Issue date as the backend stores it; never parsed, only displayed.
    pub date: String,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Keyed for Certificate {
    fn uuid(&self) -> Uuid {
        self.uuid
    }
}
