use actix_web::web;

pub mod create_user;
pub mod list_users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user::create_user)
        .service(list_users::list_users);
}
