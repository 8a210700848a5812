use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use folio::api::CERTIFICATES;
use folio::models::{self, Certificate};

use crate::web::forms::{CertificateForm, FlashQuery};
use crate::web::helpers::{render, require_admin, session_header};
use crate::web::state::AppState;
use crate::web::templates::{AdminCertificatesTemplate, CertificateRow, Flash};

fn page(
    user_name: String,
    certificates: Vec<Certificate>,
    edit: Option<CertificateRow>,
    flash: Flash,
) -> HttpResponse {
    render(AdminCertificatesTemplate {
        user_name,
        certificates: certificates.into_iter().map(CertificateRow::from).collect(),
        edit,
        flash,
    })
}

async fn fetch_certificates(
    state: &AppState,
    session: Option<&str>,
) -> (Vec<Certificate>, Option<String>) {
    match state.api.list::<Certificate>(&CERTIFICATES, session).await {
        Ok(list) => (list, None),
        Err(e) => {
            log::error!("Failed to fetch certificates: {e}");
            (Vec::new(), Some(e.to_string()))
        }
    }
}

#[get("/admin/certificates")]
pub async fn certificates_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<FlashQuery>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (certificates, fetch_error) = fetch_certificates(&state, session.as_deref()).await;
    let query = query.into_inner();
    let flash = match fetch_error {
        Some(msg) => Flash::error(msg),
        None => Flash::from_query(query.notice, query.error),
    };

    page(user.user_name, certificates, None, flash)
}

#[post("/admin/certificates")]
pub async fn certificate_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    MultipartForm(form): MultipartForm<CertificateForm>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let session = session_header(&req);
    let (mut certificates, _) = fetch_certificates(&state, session.as_deref()).await;

    let flash = match form.validate().and_then(|()| form.to_backend_form()) {
        Err(msg) => Flash::error(msg),
        Ok(upload) => match state
            .api
            .create_multipart::<Certificate>(&CERTIFICATES, session.as_deref(), upload)
            .await
        {
            Ok(created) => {
                models::append(&mut certificates, created);
                Flash::notice("Certificate created")
            }
            Err(e) => {
                log::error!("Failed to create certificate: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(user.user_name, certificates, None, flash)
}

#[get("/admin/certificates/{uuid}/edit")]
pub async fn certificate_edit_form(
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
    let (certificates, fetch_error) = fetch_certificates(&state, session.as_deref()).await;

    let edit = certificates
        .iter()
        .find(|cert| cert.uuid == uuid)
        .cloned()
        .map(CertificateRow::from);
    let flash = match (&edit, fetch_error) {
        (_, Some(msg)) => Flash::error(msg),
        (None, None) => Flash::error("Certificate not found"),
        _ => Flash::none(),
    };

    page(user.user_name, certificates, edit, flash)
}

#[post("/admin/certificates/{uuid}")]
pub async fn certificate_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    MultipartForm(form): MultipartForm<CertificateForm>,
) -> impl Responder {
    let user = match require_admin(&req, &state.api).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    let uuid = path.into_inner();
    let session = session_header(&req);
    let (mut certificates, _) = fetch_certificates(&state, session.as_deref()).await;

    let flash = match form.validate().and_then(|()| form.to_backend_form()) {
        Err(msg) => {
            let edit = certificates
                .iter()
                .find(|cert| cert.uuid == uuid)
                .cloned()
                .map(CertificateRow::from);
            return page(user.user_name, certificates, edit, Flash::error(msg));
        }
        Ok(upload) => match state
            .api
            .update_multipart::<Certificate>(&CERTIFICATES, session.as_deref(), uuid, upload)
            .await
        {
            Ok(updated) => {
                models::merge_by_uuid(&mut certificates, updated);
                Flash::notice("Certificate updated")
            }
            Err(e) => {
                log::error!("Failed to update certificate {uuid}: {e}");
                Flash::error(e.to_string())
            }
        },
    };

    page(user.user_name, certificates, None, flash)
}

#[post("/admin/certificates/{uuid}/delete")]
pub async fn certificate_delete(
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
    let (mut certificates, _) = fetch_certificates(&state, session.as_deref()).await;

    let flash = match state
        .api
        .delete(&CERTIFICATES, session.as_deref(), uuid)
        .await
    {
        Ok(()) => {
            models::remove_by_uuid(&mut certificates, uuid);
            Flash::notice("Certificate deleted")
        }
        Err(e) => {
            log::error!("Failed to delete certificate {uuid}: {e}");
            Flash::error(e.to_string())
        }
    };

    page(user.user_name, certificates, None, flash)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(certificates_page)
        .service(certificate_create)
        .service(certificate_edit_form)
        .service(certificate_update)
        .service(certificate_delete);
}
