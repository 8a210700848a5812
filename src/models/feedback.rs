use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::list_ops::Keyed;

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// Visitor feedback. Created by any authenticated user, readable by all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub uuid: Uuid,
    pub name: String,
    pub comment: String,
    /// Star rating within [1, 5].
    pub rating: i32,
}

impl Keyed for Feedback {
    fn uuid(&self) -> Uuid {
        self.uuid
    }
}
