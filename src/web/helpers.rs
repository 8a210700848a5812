use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use folio::api::ApiClient;
use folio::models::SessionUser;

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

/// The browser's raw `Cookie` header, forwarded verbatim to the backend so
/// the HTTP-only session cookie travels with every credentialed call.
pub fn session_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .filter(|s| !s.is_empty())
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Redirect that also relays the backend's `Set-Cookie` headers, used after
/// login/logout so the browser picks up (or drops) the session cookie.
pub fn see_other_with_cookies(location: &str, set_cookies: &[String]) -> HttpResponse {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location));
    for cookie in set_cookies {
        builder.append_header((header::SET_COOKIE, cookie.as_str()));
    }
    builder.finish()
}

/// Redirect back to `location` carrying an error banner code.
pub fn redirect_with_error(location: &str, message: &str) -> HttpResponse {
    see_other(&format!(
        "{location}?error={}",
        urlencoding::encode(message)
    ))
}

pub fn redirect_with_notice(location: &str, message: &str) -> HttpResponse {
    see_other(&format!(
        "{location}?notice={}",
        urlencoding::encode(message)
    ))
}

/// The shared admin guard. Resolves the session against `GET /me` once per
/// request: unauthenticated visitors land on the login page, authenticated
/// non-admins on the public site.
pub async fn require_admin(
    req: &HttpRequest,
    api: &ApiClient,
) -> Result<SessionUser, HttpResponse> {
    let session = session_header(req);
    match api.me(session.as_deref()).await {
        Ok(user) if user.is_admin() => Ok(user),
        Ok(_) => Err(see_other("/")),
        Err(_) => Err(see_other("/login")),
    }
}
