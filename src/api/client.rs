use reqwest::header;
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use std::collections::BTreeMap;

use crate::common::ApiError;
use crate::models::{SessionUser, Skill};

use super::resource::{ErrorField, Resource, UpdateMethod};

/// Result of a login/logout round-trip: the backend manages the session via
/// HTTP-only cookies, so its `Set-Cookie` headers must be relayed back to the
/// browser verbatim.
#[derive(Debug)]
pub struct AuthOutcome {
    /// Response body; login answers with the signed-in user, role included.
    pub body: Value,
    pub set_cookies: Vec<String>,
}

impl AuthOutcome {
    pub fn role(&self) -> Option<&str> {
        self.body.get("role").and_then(Value::as_str)
    }
}

/// Thin client over the portfolio REST backend. Holds no session state of
/// its own; each credentialed call forwards the browser's raw `Cookie`
/// header. Timeouts and connection reuse are whatever `reqwest` defaults to.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn with_session(rb: RequestBuilder, session: Option<&str>) -> RequestBuilder {
        match session {
            Some(cookies) => rb.header(header::COOKIE, cookies),
            None => rb,
        }
    }

    /// Decodes a 2xx response as `T`, or turns a failure response into
    /// [`ApiError::Backend`] using the resource's error-field convention.
    async fn expect_json<T: DeserializeOwned>(
        resource: &Resource,
        action: &str,
        resp: Response,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let body = resp.json::<Value>().await.unwrap_or(Value::Null);
        let message = resource
            .error_field
            .extract(&body)
            .unwrap_or_else(|| resource.fallback_message(action));

        Err(ApiError::Backend { status, message })
    }

    /// Like [`Self::expect_json`] but discards the success body; used where
    /// the UI only needs to know the mutation went through.
    async fn expect_ok(resource: &Resource, action: &str, resp: Response) -> Result<(), ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.json::<Value>().await.unwrap_or(Value::Null);
        let message = resource
            .error_field
            .extract(&body)
            .unwrap_or_else(|| resource.fallback_message(action));

        Err(ApiError::Backend { status, message })
    }

    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &Resource,
        session: Option<&str>,
    ) -> Result<Vec<T>, ApiError> {
        let rb = self.http.get(self.url(resource.path));
        let resp = Self::with_session(rb, session).send().await?;
        Self::expect_json(resource, "fetch", resp).await
    }

    /// `GET {path}/active` — the single record flagged for public display.
    pub async fn get_active<T: DeserializeOwned>(
        &self,
        resource: &Resource,
    ) -> Result<T, ApiError> {
        let url = format!("{}/active", self.url(resource.path));
        let resp = self.http.get(url).send().await?;
        Self::expect_json(resource, "fetch", resp).await
    }

    /// `GET /skills/grouped` — skills keyed by category.
    pub async fn grouped_skills(&self) -> Result<BTreeMap<String, Vec<Skill>>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/grouped", self.url(super::SKILLS.path)))
            .send()
            .await?;
        Self::expect_json(&super::SKILLS, "fetch", resp).await
    }

    pub async fn create_json<T: DeserializeOwned, B: Serialize>(
        &self,
        resource: &Resource,
        session: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        let rb = self.http.post(self.url(resource.path)).json(body);
        let resp = Self::with_session(rb, session).send().await?;
        Self::expect_json(resource, "create", resp).await
    }

    pub async fn create_multipart<T: DeserializeOwned>(
        &self,
        resource: &Resource,
        session: Option<&str>,
        form: Form,
    ) -> Result<T, ApiError> {
        let rb = self.http.post(self.url(resource.path)).multipart(form);
        let resp = Self::with_session(rb, session).send().await?;
        Self::expect_json(resource, "create", resp).await
    }

    pub async fn update_json<T: DeserializeOwned, B: Serialize>(
        &self,
        resource: &Resource,
        session: Option<&str>,
        uuid: Uuid,
        body: &B,
    ) -> Result<T, ApiError> {
        let rb = self.update_builder(resource, uuid).json(body);
        let resp = Self::with_session(rb, session).send().await?;
        Self::expect_json(resource, "update", resp).await
    }

    pub async fn update_multipart<T: DeserializeOwned>(
        &self,
        resource: &Resource,
        session: Option<&str>,
        uuid: Uuid,
        form: Form,
    ) -> Result<T, ApiError> {
        let rb = self.update_builder(resource, uuid).multipart(form);
        let resp = Self::with_session(rb, session).send().await?;
        Self::expect_json(resource, "update", resp).await
    }

    /// `PATCH {path}/{uuid}/active` — asks the backend to crown this record
    /// as the active one. The caller mirrors the flip locally afterwards.
    pub async fn set_active(
        &self,
        resource: &Resource,
        session: Option<&str>,
        uuid: Uuid,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{uuid}/active", self.url(resource.path));
        let rb = self.http.patch(url);
        let resp = Self::with_session(rb, session).send().await?;
        Self::expect_ok(resource, "activate", resp).await
    }

    pub async fn delete(
        &self,
        resource: &Resource,
        session: Option<&str>,
        uuid: Uuid,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{uuid}", self.url(resource.path));
        let rb = self.http.delete(url);
        let resp = Self::with_session(rb, session).send().await?;
        Self::expect_ok(resource, "delete", resp).await
    }

    fn update_builder(&self, resource: &Resource, uuid: Uuid) -> RequestBuilder {
        let url = format!("{}/{uuid}", self.url(resource.path));
        match resource.update {
            UpdateMethod::Patch => self.http.patch(url),
            UpdateMethod::Put => self.http.put(url),
        }
    }

    // --- session / identity ---

    /// `GET /me`. Any failure — missing cookie, 401, or a transport error —
    /// collapses into [`ApiError::Unauthenticated`]; the UI treats all of
    /// them as "logged out".
    pub async fn me(&self, session: Option<&str>) -> Result<SessionUser, ApiError> {
        let rb = self.http.get(self.url("/me"));
        let resp = Self::with_session(rb, session)
            .send()
            .await
            .map_err(|_| ApiError::Unauthenticated)?;

        if !resp.status().is_success() {
            return Err(ApiError::Unauthenticated);
        }

        resp.json::<SessionUser>()
            .await
            .map_err(|_| ApiError::Unauthenticated)
    }

    /// `POST /login`. On success the backend's session cookies are captured
    /// for relaying to the browser.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, ApiError> {
        let resp = self
            .http
            .post(self.url("/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        Self::auth_outcome(resp, "Login failed").await
    }

    /// `DELETE /logout`. The backend answers with an expiring session cookie.
    pub async fn logout(&self, session: Option<&str>) -> Result<AuthOutcome, ApiError> {
        let rb = self.http.delete(self.url("/logout"));
        let resp = Self::with_session(rb, session).send().await?;

        Self::auth_outcome(resp, "Logout failed").await
    }

    /// `POST /register`. Registration does not log the user in; the UI sends
    /// them to the login page afterwards.
    pub async fn register(
        &self,
        user_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/register"))
            .json(&json!({
                "userName": user_name,
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.json::<Value>().await.unwrap_or(Value::Null);
        let message = ErrorField::Msg
            .extract(&body)
            .unwrap_or_else(|| "Registration failed".to_string());

        Err(ApiError::Backend { status, message })
    }

    async fn auth_outcome(resp: Response, fallback: &str) -> Result<AuthOutcome, ApiError> {
        let status = resp.status();
        let set_cookies = resp
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();

        if status.is_success() {
            let body = resp.json::<Value>().await.unwrap_or(Value::Null);
            return Ok(AuthOutcome { body, set_cookies });
        }

        let body = resp.json::<Value>().await.unwrap_or(Value::Null);
        let message = ErrorField::Msg
            .extract(&body)
            .unwrap_or_else(|| fallback.to_string());

        Err(ApiError::Backend { status, message })
    }
}
