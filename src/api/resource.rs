use serde_json::Value;

/// Which field the backend uses to carry a failure message. The REST API is
/// split down the middle: content endpoints answer `{"error": ...}` while the
/// user/auth family answers `{"msg": ...}`. The split is part of the contract
/// and is preserved here instead of being unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorField {
    Error,
    Msg,
}

impl ErrorField {
    pub fn key(&self) -> &'static str {
        match self {
            ErrorField::Error => "error",
            ErrorField::Msg => "msg",
        }
    }

    /// Pulls the failure message out of an error payload, if present.
    pub fn extract(&self, body: &Value) -> Option<String> {
        body.get(self.key())
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// HTTP verb the backend expects for record updates. Another contract quirk:
/// Hero/About/Users take PATCH, Skills/Projects/Certificates take PUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Patch,
    Put,
}

/// Static description of one CRUD endpoint family. Every entity page drives
/// the same client code through one of these, instead of re-spelling paths
/// and verbs per entity.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub path: &'static str,
    /// Human label used in fallback error messages.
    pub label: &'static str,
    pub error_field: ErrorField,
    pub update: UpdateMethod,
}

impl Resource {
    pub fn fallback_message(&self, action: &str) -> String {
        format!("Failed to {action} {}", self.label)
    }
}

pub const HERO: Resource = Resource {
    path: "/hero",
    label: "hero",
    error_field: ErrorField::Error,
    update: UpdateMethod::Patch,
};

pub const ABOUT: Resource = Resource {
    path: "/about",
    label: "about section",
    error_field: ErrorField::Error,
    update: UpdateMethod::Patch,
};

pub const SKILLS: Resource = Resource {
    path: "/skills",
    label: "skill",
    error_field: ErrorField::Error,
    update: UpdateMethod::Put,
};

pub const PROJECTS: Resource = Resource {
    path: "/project",
    label: "project",
    error_field: ErrorField::Error,
    update: UpdateMethod::Put,
};

pub const CERTIFICATES: Resource = Resource {
    path: "/certificate",
    label: "certificate",
    error_field: ErrorField::Error,
    update: UpdateMethod::Put,
};

pub const FEEDBACK: Resource = Resource {
    path: "/feedback",
    label: "feedback",
    error_field: ErrorField::Error,
    update: UpdateMethod::Put,
};

pub const USERS: Resource = Resource {
    path: "/users",
    label: "user",
    error_field: ErrorField::Msg,
    update: UpdateMethod::Patch,
};
