use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use folio::api::ABOUT;
use folio::models::{self, About};

use crate::web::forms::{AboutForm, FlashQuery};
use crate::web::helpers::{render, require_admin, session_header};
use crate::web::state::AppState;
use crate::web::templates::{AboutRow, AdminAboutTemplate, Flash};

fn page(user_name: String, abouts: Vec<About>, edit: Option<AboutRow>, flash: Flash) -> HttpResponse {
    render(AdminAboutTemplate {
        user_name,
        abouts: abouts.into_iter().map(AboutRow::from).collect(),
        edit,
        flash,
    })
}

async fn fetch_abouts(state: &AppState, session: Option<&str>) -> (Vec<About>, Option<String>) {
    match state.api.list::<About>(&ABOUT, session).await {
        Ok(list) => (list, None),
        Err(e) => {
            log::error!("Failed to fetch about entries: {e}");
            (Vec::new(), Some(e.to_string()))
        }
    }
}

#[get("/admin/about")]
pub async fn about_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<FlashQuery>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (abouts, fetch_error) = fetch_abouts(&state, session.as_deref()).await;
    let query = query.into_inner();
    let flash = match fetch_error {
        Some(msg) => Flash::error(msg),
        None => Flash::from_query(query.notice, query.error),
    };

    page(user.user_name, abouts, None, flash)
}

/// Create goes out as multipart: the profile image upload is mandatory here,
/// unlike on edit where the stored image survives an empty file input.
#[post("/admin/about")]
pub async fn about_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    MultipartForm(form): MultipartForm<AboutForm>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (mut abouts, _) = fetch_abouts(&state, session.as_deref()).await;

    let flash = match form.validate(true).and_then(|()| form.to_backend_form()) {
        Err(msg) => Flash::error(msg),
        Ok(upload) => match state
            .api
            .create_multipart::<About>(&ABOUT, session.as_deref(), upload)
            .await
        {
            Ok(created) => {
                models::append(&mut abouts, created);
                Flash::notice("About entry created")
            }
            Err(e) => {
                log::error!("Failed to create about entry: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(user.user_name, abouts, None, flash)
}

#[get("/admin/about/{uuid}/edit")]
pub async fn about_edit_form(
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
    let (abouts, fetch_error) = fetch_abouts(&state, session.as_deref()).await;

    let edit = abouts
        .iter()
        .find(|about| about.uuid == uuid)
        .cloned()
        .map(AboutRow::from);
    let flash = match (&edit, fetch_error) {
        (_, Some(msg)) => Flash::error(msg),
        (None, None) => Flash::error("About entry not found"),
        _ => Flash::none(),
    };

    page(user.user_name, abouts, edit, flash)
}

#[post("/admin/about/{uuid}")]
pub async fn about_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    MultipartForm(form): MultipartForm<AboutForm>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (mut abouts, _) = fetch_abouts(&state, session.as_deref()).await;

    let flash = match form.validate(false).and_then(|()| form.to_backend_form()) {
        Err(msg) => {
            let edit = abouts
                .iter()
                .find(|about| about.uuid == uuid)
                .cloned()
                .map(AboutRow::from);
            return page(user.user_name, abouts, edit, Flash::error(msg));
        }
        Ok(upload) => match state
            .api
            .update_multipart::<About>(&ABOUT, session.as_deref(), uuid, upload)
            .await
        {
            Ok(updated) => {
                models::merge_by_uuid(&mut abouts, updated);
                Flash::notice("About entry updated")
            }
            Err(e) => {
                log::error!("Failed to update about entry {uuid}: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(user.user_name, abouts, None, flash)
}

#[post("/admin/about/{uuid}/activate")]
pub async fn about_activate(
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
    let (mut abouts, _) = fetch_abouts(&state, session.as_deref()).await;

    let flash = match state.api.set_active(&ABOUT, session.as_deref(), uuid).await {
        Ok(()) => {
            models::mark_active_only(&mut abouts, uuid);
            Flash::notice("About entry set as active")
        }
        Err(e) => {
            log::error!("Failed to activate about entry {uuid}: {e}");
            Flash::error(e.to_string())
        }
    };

    page(user.user_name, abouts, None, flash)
}

#[post("/admin/about/{uuid}/delete")]
pub async fn about_delete(
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
    let (mut abouts, _) = fetch_abouts(&state, session.as_deref()).await;

    let flash = match state.api.delete(&ABOUT, session.as_deref(), uuid).await {
        Ok(()) => {
            models::remove_by_uuid(&mut abouts, uuid);
            Flash::notice("About entry deleted")
        }
        Err(e) => {
            log::error!("Failed to delete about entry {uuid}: {e}");
            Flash::error(e.to_string())
        }
    };

    page(user.user_name, abouts, None, flash)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(about_page)
        .service(about_create)
        .service(about_edit_form)
        .service(about_update)
        .service(about_activate)
        .service(about_delete);
}
