use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use folio::api::SKILLS;
use folio::models::{self, Skill};

use crate::web::forms::{FlashQuery, SkillForm};
use crate::web::helpers::{render, require_admin, session_header};
use crate::web::state::AppState;
use crate::web::templates::{AdminSkillsTemplate, Flash, SkillRow};

fn page(user_name: String, skills: Vec<Skill>, edit: Option<SkillRow>, flash: Flash) -> HttpResponse {
    render(AdminSkillsTemplate {
        user_name,
        skills: skills.into_iter().map(SkillRow::from).collect(),
        edit,
        flash,
    })
}

async fn fetch_skills(state: &AppState, session: Option<&str>) -> (Vec<Skill>, Option<String>) {
    match state.api.list::<Skill>(&SKILLS, session).await {
        Ok(list) => (list, None),
        Err(e) => {
            log::error!("Failed to fetch skills: {e}");
            (Vec::new(), Some(e.to_string()))
        }
    }
}

#[get("/admin/skills")]
pub async fn skills_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<FlashQuery>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (skills, fetch_error) = fetch_skills(&state, session.as_deref()).await;
    let query = query.into_inner();
    let flash = match fetch_error {
        Some(msg) => Flash::error(msg),
        None => Flash::from_query(query.notice, query.error),
    };

    page(user.user_name, skills, None, flash)
}

#[post("/admin/skills")]
pub async fn skill_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<SkillForm>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (mut skills, _) = fetch_skills(&state, session.as_deref()).await;

    let flash = match form.validate() {
        Err(msg) => Flash::error(msg),
        Ok(level) => match state
            .api
            .create_json::<Skill, _>(&SKILLS, session.as_deref(), &form.payload(level))
            .await
        {
            Ok(created) => {
                models::append(&mut skills, created);
                Flash::notice("Skill created")
            }
            Err(e) => {
                log::error!("Failed to create skill: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(user.user_name, skills, None, flash)
}

#[get("/admin/skills/{uuid}/edit")]
pub async fn skill_edit_form(
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
    let (skills, fetch_error) = fetch_skills(&state, session.as_deref()).await;

    let edit = skills
        .iter()
        .find(|skill| skill.uuid == uuid)
        .cloned()
        .map(SkillRow::from);
    let flash = match (&edit, fetch_error) {
        (_, Some(msg)) => Flash::error(msg),
        (None, None) => Flash::error("Skill not found"),
        _ => Flash::none(),
    };

    page(user.user_name, skills, edit, flash)
}

#[post("/admin/skills/{uuid}")]
pub async fn skill_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<SkillForm>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (mut skills, _) = fetch_skills(&state, session.as_deref()).await;

    let flash = match form.validate() {
        Err(msg) => {
            let edit = skills
                .iter()
                .find(|skill| skill.uuid == uuid)
                .cloned()
                .map(SkillRow::from);
            return page(user.user_name, skills, edit, Flash::error(msg));
        }
        Ok(level) => match state
            .api
            .update_json::<Skill, _>(&SKILLS, session.as_deref(), uuid, &form.payload(level))
            .await
        {
            Ok(updated) => {
                models::merge_by_uuid(&mut skills, updated);
                Flash::notice("Skill updated")
            }
            Err(e) => {
                log::error!("Failed to update skill {uuid}: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(user.user_name, skills, None, flash)
}

#[post("/admin/skills/{uuid}/delete")]
pub async fn skill_delete(
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
    let (mut skills, _) = fetch_skills(&state, session.as_deref()).await;

    let flash = match state.api.delete(&SKILLS, session.as_deref(), uuid).await {
        Ok(()) => {
            models::remove_by_uuid(&mut skills, uuid);
            Flash::notice("Skill deleted")
        }
        Err(e) => {
            log::error!("Failed to delete skill {uuid}: {e}");
            Flash::error(e.to_string())
        }
    };

    page(user.user_name, skills, None, flash)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(skills_page)
        .service(skill_create)
        .service(skill_edit_form)
        .service(skill_update)
        .service(skill_delete);
}
