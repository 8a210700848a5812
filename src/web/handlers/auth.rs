use actix_web::{get, post, web, HttpRequest, Responder};

use crate::web::forms::{FlashQuery, LoginForm, RegisterForm};
use crate::web::helpers::{
    redirect_with_error, redirect_with_notice, render, see_other, see_other_with_cookies,
    session_header,
};
use crate::web::state::AppState;
use crate::web::templates::{Flash, LoginTemplate, RegisterTemplate};

#[get("/login")]
pub async fn login_form(query: web::Query<FlashQuery>) -> impl Responder {
    let query = query.into_inner();
    render(LoginTemplate {
        flash: Flash::from_query(query.notice, query.error),
    })
}

/// Proxies the credentials to `POST /login` and relays the backend's session
/// cookie to the browser. Admins land on the dashboard, everyone else on the
/// public site.
#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    if let Err(msg) = form.validate() {
        return redirect_with_error("/login", &msg);
    }

    match state.api.login(form.email.trim(), &form.password).await {
        Ok(outcome) => {
            let target = if outcome.role() == Some("admin") {
                "/admin/dashboard"
            } else {
                "/"
            };
            see_other_with_cookies(target, &outcome.set_cookies)
        }
        Err(e) => redirect_with_error("/login", &e.to_string()),
    }
}

#[get("/register")]
pub async fn register_form(query: web::Query<FlashQuery>) -> impl Responder {
    let query = query.into_inner();
    render(RegisterTemplate {
        flash: Flash::from_query(query.notice, query.error),
    })
}

#[post("/register")]
pub async fn register_submit(
    state: web::Data<AppState>,
    form: web::Form<RegisterForm>,
) -> impl Responder {
    if let Err(msg) = form.validate() {
        return redirect_with_error("/register", &msg);
    }

    match state
        .api
        .register(form.user_name.trim(), form.email.trim(), &form.password)
        .await
    {
        Ok(()) => redirect_with_notice("/login", "Account created. Please sign in."),
        Err(e) => redirect_with_error("/register", &e.to_string()),
    }
}

/// `DELETE /logout` on the backend; the relayed `Set-Cookie` header expires
/// the session in the browser. A failed logout still sends the visitor home.
#[post("/logout")]
pub async fn logout_submit(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let session = session_header(&req);
    match state.api.logout(session.as_deref()).await {
        Ok(outcome) => see_other_with_cookies("/", &outcome.set_cookies),
        Err(e) => {
            log::error!("Logout failed: {e}");
            see_other("/")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(register_form)
        .service(register_submit)
        .service(logout_submit);
}
