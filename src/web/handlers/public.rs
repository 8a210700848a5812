use actix_web::{get, post, web, HttpRequest, Responder};
use serde_json::json;

use folio::api::{ABOUT, CERTIFICATES, FEEDBACK, HERO, PROJECTS};
use folio::models::{About, Certificate, Feedback, Hero, Project};

use crate::web::forms::{FeedbackForm, FlashQuery};
use crate::web::helpers::{
    redirect_with_error, redirect_with_notice, render, see_other, session_header,
};
use crate::web::state::AppState;
use crate::web::templates::{
    AboutView, FeedbackView, Flash, HeroView, PublicIndexTemplate, SkillGroupView, SkillView,
};

/// The whole public site is one page of independently fetched sections.
/// Hero, About and Feedback fall back to placeholder content when their
/// fetch fails; Skills, Projects and Certificates surface an explicit error
/// block with a reload link instead.
#[get("/")]
pub async fn public_index(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<FlashQuery>,
) -> impl Responder {
    let api = &state.api;
    let session = session_header(&req);

    let (hero, about, skills, projects, certificates, feedbacks, me) = futures_util::join!(
        api.get_active::<Hero>(&HERO),
        api.get_active::<About>(&ABOUT),
        api.grouped_skills(),
        api.list::<Project>(&PROJECTS, None),
        api.list::<Certificate>(&CERTIFICATES, None),
        api.list::<Feedback>(&FEEDBACK, None),
        api.me(session.as_deref()),
    );

    let hero = hero.map(HeroView::from).unwrap_or_default();
    let about = about.map(AboutView::from).unwrap_or_default();

    let (skill_groups, skills_failed) = match skills {
        Ok(grouped) => {
            let groups = grouped
                .into_iter()
                .filter(|(_, skills)| !skills.is_empty())
                .map(|(category, skills)| SkillGroupView {
                    category,
                    skills: skills.into_iter().map(SkillView::from).collect(),
                })
                .collect();
            (groups, false)
        }
        Err(e) => {
            log::error!("Failed to fetch grouped skills: {e}");
            (Vec::new(), true)
        }
    };

    let (projects, projects_failed) = match projects {
        Ok(list) => (list.into_iter().map(Into::into).collect(), false),
        Err(e) => {
            log::error!("Failed to fetch projects: {e}");
            (Vec::new(), true)
        }
    };

    let (certificates, certificates_failed) = match certificates {
        Ok(list) => (list.into_iter().map(Into::into).collect(), false),
        Err(e) => {
            log::error!("Failed to fetch certificates: {e}");
            (Vec::new(), true)
        }
    };

    // Feedback degrades silently to an empty wall.
    let feedbacks = feedbacks
        .unwrap_or_default()
        .into_iter()
        .map(FeedbackView::from)
        .collect();

    let query = query.into_inner();
    render(PublicIndexTemplate {
        hero,
        about,
        skill_groups,
        skills_failed,
        projects,
        projects_failed,
        certificates,
        certificates_failed,
        feedbacks,
        logged_in: me.is_ok(),
        flash: Flash::from_query(query.notice, query.error),
    })
}

/// Feedback is the only public write path. Validation runs before anything
/// touches the network; the identity endpoint then resolves the display
/// name, sending stray visitors to the login page.
#[post("/feedback")]
pub async fn feedback_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<FeedbackForm>,
) -> impl Responder {
    let (comment, rating) = match form.validate() {
        Ok(parts) => parts,
        Err(msg) => return redirect_with_error("/", &msg),
    };

    let session = session_header(&req);
    let me = match state.api.me(session.as_deref()).await {
        Ok(user) => user,
        Err(_) => return see_other("/login"),
    };

    let body = json!({
        "name": me.user_name,
        "comment": comment,
        "rating": rating,
    });

    match state
        .api
        .create_json::<Feedback, _>(&FEEDBACK, session.as_deref(), &body)
        .await
    {
        Ok(_) => redirect_with_notice("/", "Thanks for your feedback!"),
        Err(e) => {
            log::error!("Failed to submit feedback: {e}");
            redirect_with_error("/", &e.to_string())
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(public_index).service(feedback_submit);
}
