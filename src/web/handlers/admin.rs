use actix_web::{get, web, HttpRequest, Responder};

use crate::web::forms::FlashQuery;
use crate::web::helpers::{render, require_admin, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminDashboardTemplate, Flash};

#[get("/admin")]
pub async fn admin_index() -> impl Responder {
    see_other("/admin/dashboard")
}

#[get("/admin/dashboard")]
pub async fn admin_dashboard(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<FlashQuery>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let query = query.into_inner();
    render(AdminDashboardTemplate {
        user_name: user.user_name,
        flash: Flash::from_query(query.notice, query.error),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_index).service(admin_dashboard);
}
