pub mod hello;
pub mod profile;
pub mod users;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(hello::hello);
    cfg.service(profile::get_profile);
    cfg.configure(users::configure);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::configure_with;
    use actix_web::{test, App};
    use db_connector::memory::MemoryUserStore;

    #[actix_web::test]
    async fn test_routes() {
        let app = App::new()
            .configure(configure_with(MemoryUserStore::new()))
            .configure(configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get().uri("/json").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::get().uri("/users/1").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::get().uri("/profile/1").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_payload(r#"{"name":"Ana","email":"a@x.com"}"#)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::get().uri("/profile/1").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);
    }
}
