pub mod admin;
pub mod admin_about;
pub mod admin_certificates;
pub mod admin_hero;
pub mod admin_projects;
pub mod admin_skills;
pub mod admin_users;
pub mod auth;
pub mod public;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    admin::configure(cfg);
    admin_hero::configure(cfg);
    admin_about::configure(cfg);
    admin_skills::configure(cfg);
    admin_projects::configure(cfg);
    admin_certificates::configure(cfg);
    admin_users::configure(cfg);
}
