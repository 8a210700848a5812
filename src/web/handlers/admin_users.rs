use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use serde_json::Value;
use uuid::Uuid;

use folio::api::USERS;
use folio::models::{self, Role, User};

use crate::web::forms::{FlashQuery, UserCreateForm, UserUpdateForm};
use crate::web::helpers::{render, require_admin, session_header};
use crate::web::state::AppState;
use crate::web::templates::{AdminUsersTemplate, Flash, UserRow};

fn page(user_name: String, users: Vec<User>, edit: Option<UserRow>, flash: Flash) -> HttpResponse {
    render(AdminUsersTemplate {
        user_name,
        users: users.into_iter().map(UserRow::from).collect(),
        edit,
        flash,
    })
}

async fn fetch_users(state: &AppState, session: Option<&str>) -> (Vec<User>, Option<String>) {
    match state.api.list::<User>(&USERS, session).await {
        Ok(list) => (list, None),
        Err(e) => {
            log::error!("Failed to fetch users: {e}");
            (Vec::new(), Some(e.to_string()))
        }
    }
}

fn parse_role(role: &str) -> Role {
    match role {
        "admin" => Role::Admin,
        _ => Role::User,
    }
}

#[get("/admin/users")]
pub async fn users_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<FlashQuery>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (users, fetch_error) = fetch_users(&state, session.as_deref()).await;
    let query = query.into_inner();
    let flash = match fetch_error {
        Some(msg) => Flash::error(msg),
        None => Flash::from_query(query.notice, query.error),
    };

    page(user.user_name, users, None, flash)
}

/// The users endpoint answers a create with just the new identifier, not the
/// full record, so the local list entry is assembled from the submitted form.
#[post("/admin/users")]
pub async fn user_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<UserCreateForm>,
) -> impl Responder {
    let admin = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (mut users, _) = fetch_users(&state, session.as_deref()).await;

    let flash = match form.validate() {
        Err(msg) => Flash::error(msg),
        Ok(()) => match state
            .api
            .create_json::<Value, _>(&USERS, session.as_deref(), &form.payload())
            .await
        {
            Ok(body) => {
                let uuid = body
                    .get("uuid")
                    .and_then(Value::as_str)
                    .and_then(|s| Uuid::parse_str(s).ok());
                if let Some(uuid) = uuid {
                    models::append(
                        &mut users,
                        User {
                            uuid,
                            user_name: form.user_name.trim().to_string(),
                            email: form.email.trim().to_string(),
                            role: parse_role(&form.role),
                        },
                    );
                }
                Flash::notice("User created")
            }
            Err(e) => {
                log::error!("Failed to create user: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(admin.user_name, users, None, flash)
}

#[get("/admin/users/{uuid}/edit")]
pub async fn user_edit_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let admin = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (users, fetch_error) = fetch_users(&state, session.as_deref()).await;

    let edit = users
        .iter()
        .find(|user| user.uuid == uuid)
        .cloned()
        .map(UserRow::from);
    let flash = match (&edit, fetch_error) {
        (_, Some(msg)) => Flash::error(msg),
        (None, None) => Flash::error("User not found"),
        _ => Flash::none(),
    };

    page(admin.user_name, users, edit, flash)
}

#[post("/admin/users/{uuid}")]
pub async fn user_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<UserUpdateForm>,
) -> impl Responder {
    let admin = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (mut users, _) = fetch_users(&state, session.as_deref()).await;

    let flash = match form.validate() {
        Err(msg) => {
            let edit = users
                .iter()
                .find(|user| user.uuid == uuid)
                .cloned()
                .map(UserRow::from);
            return page(admin.user_name, users, edit, Flash::error(msg));
        }
        Ok(()) => match state
            .api
            .update_json::<Value, _>(&USERS, session.as_deref(), uuid, &form.payload())
            .await
        {
            Ok(_) => {
                // Same asymmetry as create: merge the submitted fields.
                models::merge_by_uuid(
                    &mut users,
                    User {
                        uuid,
                        user_name: form.user_name.trim().to_string(),
                        email: form.email.trim().to_string(),
                        role: parse_role(&form.role),
                    },
                );
                Flash::notice("User updated")
            }
            Err(e) => {
                log::error!("Failed to update user {uuid}: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(admin.user_name, users, None, flash)
}

#[post("/admin/users/{uuid}/delete")]
pub async fn user_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let admin = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (mut users, _) = fetch_users(&state, session.as_deref()).await;

    let flash = match state.api.delete(&USERS, session.as_deref(), uuid).await {
        Ok(()) => {
            models::remove_by_uuid(&mut users, uuid);
            Flash::notice("User deleted")
        }
        Err(e) => {
            log::error!("Failed to delete user {uuid}: {e}");
            Flash::error(e.to_string())
        }
    };

    page(admin.user_name, users, None, flash)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users_page)
        .service(user_create)
        .service(user_edit_form)
        .service(user_update)
        .service(user_delete);
}
