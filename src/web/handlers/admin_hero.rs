use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use folio::api::HERO;
use folio::models::{self, Hero};

use crate::web::forms::{FlashQuery, HeroForm};
use crate::web::helpers::{render, require_admin, session_header};
use crate::web::state::AppState;
use crate::web::templates::{AdminHeroTemplate, Flash, HeroRow};

fn page(user_name: String, heroes: Vec<Hero>, edit: Option<HeroRow>, flash: Flash) -> HttpResponse {
    render(AdminHeroTemplate {
        user_name,
        heroes: heroes.into_iter().map(HeroRow::from).collect(),
        edit,
        flash,
    })
}

/// List fetch shared by every hero action. Fetch failures surface as a
/// banner over an empty table; mutations are applied to this snapshot
/// locally instead of refetching afterwards.
async fn fetch_heroes(state: &AppState, session: Option<&str>) -> (Vec<Hero>, Option<String>) {
    match state.api.list::<Hero>(&HERO, session).await {
        Ok(list) => (list, None),
        Err(e) => {
            log::error!("Failed to fetch heroes: {e}");
            (Vec::new(), Some(e.to_string()))
        }
    }
}

#[get("/admin/hero")]
pub async fn hero_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<FlashQuery>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (heroes, fetch_error) = fetch_heroes(&state, session.as_deref()).await;
    let query = query.into_inner();
    let flash = match fetch_error {
        Some(msg) => Flash::error(msg),
        None => Flash::from_query(query.notice, query.error),
    };

    page(user.user_name, heroes, None, flash)
}

#[post("/admin/hero")]
pub async fn hero_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<HeroForm>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (mut heroes, _) = fetch_heroes(&state, session.as_deref()).await;

    let flash = match form.validate() {
        Err(msg) => Flash::error(msg),
        Ok(()) => match state
            .api
            .create_json::<Hero, _>(&HERO, session.as_deref(), &form.payload())
            .await
        {
            Ok(created) => {
                models::append(&mut heroes, created);
                Flash::notice("Hero created")
            }
            Err(e) => {
                log::error!("Failed to create hero: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(user.user_name, heroes, None, flash)
}

#[get("/admin/hero/{uuid}/edit")]
pub async fn hero_edit_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (heroes, fetch_error) = fetch_heroes(&state, session.as_deref()).await;

    let edit = heroes
        .iter()
        .find(|hero| hero.uuid == uuid)
        .cloned()
        .map(HeroRow::from);
    let flash = match (&edit, fetch_error) {
        (_, Some(msg)) => Flash::error(msg),
        (None, None) => Flash::error("Hero not found"),
        _ => Flash::none(),
    };

    page(user.user_name, heroes, edit, flash)
}

#[post("/admin/hero/{uuid}")]
pub async fn hero_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<HeroForm>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (mut heroes, _) = fetch_heroes(&state, session.as_deref()).await;

    let flash = match form.validate() {
        Err(msg) => {
            // Keep the edit form open with the stored values.
            let edit = heroes
                .iter()
                .find(|hero| hero.uuid == uuid)
                .cloned()
                .map(HeroRow::from);
            return page(user.user_name, heroes, edit, Flash::error(msg));
        }
        Ok(()) => match state
            .api
            .update_json::<Hero, _>(&HERO, session.as_deref(), uuid, &form.payload())
            .await
        {
            Ok(updated) => {
                models::merge_by_uuid(&mut heroes, updated);
                Flash::notice("Hero updated")
            }
            Err(e) => {
                log::error!("Failed to update hero {uuid}: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(user.user_name, heroes, None, flash)
}

#[post("/admin/hero/{uuid}/activate")]
pub async fn hero_activate(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (mut heroes, _) = fetch_heroes(&state, session.as_deref()).await;

    let flash = match state.api.set_active(&HERO, session.as_deref(), uuid).await {
        Ok(()) => {
            // Mirror the backend's single-winner flag locally.
            models::mark_active_only(&mut heroes, uuid);
            Flash::notice("Hero set as active")
        }
        Err(e) => {
            log::error!("Failed to activate hero {uuid}: {e}");
            Flash::error(e.to_string())
        }
    };

    page(user.user_name, heroes, None, flash)
}

#[post("/admin/hero/{uuid}/delete")]
pub async fn hero_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (mut heroes, _) = fetch_heroes(&state, session.as_deref()).await;

    let flash = match state.api.delete(&HERO, session.as_deref(), uuid).await {
        Ok(()) => {
            models::remove_by_uuid(&mut heroes, uuid);
            Flash::notice("Hero deleted")
        }
        Err(e) => {
            log::error!("Failed to delete hero {uuid}: {e}");
            Flash::error(e.to_string())
        }
    };

    page(user.user_name, heroes, None, flash)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(hero_page)
        .service(hero_create)
        .service(hero_edit_form)
        .service(hero_update)
        .service(hero_activate)
        .service(hero_delete);
}
