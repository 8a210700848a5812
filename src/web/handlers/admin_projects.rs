use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use folio::api::PROJECTS;
use folio::models::{self, Project};

use crate::web::forms::{FlashQuery, ProjectForm};
use crate::web::helpers::{render, require_admin, session_header};
use crate::web::state::AppState;
use crate::web::templates::{AdminProjectsTemplate, Flash, ProjectRow};

fn page(
    user_name: String,
    projects: Vec<Project>,
    edit: Option<ProjectRow>,
    flash: Flash,
) -> HttpResponse {
    render(AdminProjectsTemplate {
        user_name,
        projects: projects.into_iter().map(ProjectRow::from).collect(),
        edit,
        flash,
    })
}

async fn fetch_projects(state: &AppState, session: Option<&str>) -> (Vec<Project>, Option<String>) {
    match state.api.list::<Project>(&PROJECTS, session).await {
        Ok(list) => (list, None),
        Err(e) => {
            log::error!("Failed to fetch projects: {e}");
            (Vec::new(), Some(e.to_string()))
        }
    }
}

#[get("/admin/projects")]
pub async fn projects_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<FlashQuery>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (projects, fetch_error) = fetch_projects(&state, session.as_deref()).await;
    let query = query.into_inner();
    let flash = match fetch_error {
        Some(msg) => Flash::error(msg),
        None => Flash::from_query(query.notice, query.error),
    };

    page(user.user_name, projects, None, flash)
}

#[post("/admin/projects")]
pub async fn project_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    MultipartForm(form): MultipartForm<ProjectForm>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (mut projects, _) = fetch_projects(&state, session.as_deref()).await;

    let flash = match form.validate().and_then(|()| form.to_backend_form()) {
        Err(msg) => Flash::error(msg),
        Ok(upload) => match state
            .api
            .create_multipart::<Project>(&PROJECTS, session.as_deref(), upload)
            .await
        {
            Ok(created) => {
                models::append(&mut projects, created);
                Flash::notice("Project created")
            }
            Err(e) => {
                log::error!("Failed to create project: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(user.user_name, projects, None, flash)
}

#[get("/admin/projects/{uuid}/edit")]
pub async fn project_edit_form(
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
    let (projects, fetch_error) = fetch_projects(&state, session.as_deref()).await;

    let edit = projects
        .iter()
        .find(|project| project.uuid == uuid)
        .cloned()
        .map(ProjectRow::from);
    let flash = match (&edit, fetch_error) {
        (_, Some(msg)) => Flash::error(msg),
        (None, None) => Flash::error("Project not found"),
        _ => Flash::none(),
    };

    page(user.user_name, projects, edit, flash)
}

#[post("/admin/projects/{uuid}")]
pub async fn project_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    MultipartForm(form): MultipartForm<ProjectForm>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (mut projects, _) = fetch_projects(&state, session.as_deref()).await;

    let flash = match form.validate().and_then(|()| form.to_backend_form()) {
        Err(msg) => {
            let edit = projects
                .iter()
                .find(|project| project.uuid == uuid)
                .cloned()
                .map(ProjectRow::from);
            return page(user.user_name, projects, edit, Flash::error(msg));
        }
        Ok(upload) => match state
            .api
            .update_multipart::<Project>(&PROJECTS, session.as_deref(), uuid, upload)
            .await
        {
            Ok(updated) => {
                models::merge_by_uuid(&mut projects, updated);
                Flash::notice("Project updated")
            }
            Err(e) => {
                log::error!("Failed to update project {uuid}: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(user.user_name, projects, None, flash)
}

#[post("/admin/projects/{uuid}/delete")]
pub async fn project_delete(
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
    let (mut projects, _) = fetch_projects(&state, session.as_deref()).await;

    let flash = match state.api.delete(&PROJECTS, session.as_deref(), uuid).await {
        Ok(()) => {
            models::remove_by_uuid(&mut projects, uuid);
            Flash::notice("Project deleted")
        }
        Err(e) => {
            log::error!("Failed to delete project {uuid}: {e}");
            Flash::error(e.to_string())
        }
    };

    page(user.user_name, projects, None, flash)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(projects_page)
        .service(project_create)
        .service(project_edit_form)
        .service(project_update)
        .service(project_delete);
}
