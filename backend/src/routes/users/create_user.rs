/* user-service
 * Copyright (C) 2024 Frederic Henrichs <frederic@tinkerforge.com>
 *
 * This library is free software; you can redistribute it and/or
 * modify it under the terms of the GNU Lesser General Public
 * License as published by the Free Software Foundation; either
 * version 2 of the License, or (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
 * Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public
 * License along with this library; if not, write to the
 * Free Software Foundation, Inc., 59 Temple Place - Suite 330,
 * Boston, MA 02111-1307, USA.
 */

use actix_web::{post, web, HttpResponse, Responder};
use db_connector::models::users::NewUser;
use serde_json::{Map, Value};

use crate::{
    error::Error,
    models::user::{CreateUserSchema, UserSchema},
    utils::{map_store_error, web_block_unpacked},
    AppState,
};

/// Create a new user. The id is assigned by the database.
#[utoipa::path(
    request_body = CreateUserSchema,
    responses(
        (status = 200, description = "The created user", body = UserSchema),
        (status = 400, description = "The body is not a valid user or the database rejected it."),
        (status = 500)
    )
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> actix_web::Result<impl Responder> {
    // Decoded by hand so the client gets the decoder's message instead of a generic one.
    // Derived deserializers also take sequences, only an object is a user.
    let object: Map<String, Value> =
        serde_json::from_slice(&body).map_err(|err| Error::InvalidBody(err.to_string()))?;
    let payload: CreateUserSchema = serde_json::from_value(Value::Object(object))
        .map_err(|err| Error::InvalidBody(err.to_string()))?;
    let new_user = NewUser::from(payload);

    let user = web_block_unpacked(move || {
        state
            .store
            .create_user(new_user)
            .map_err(map_store_error)
    })
    .await?;

    Ok(HttpResponse::Ok().json(UserSchema::from(user)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        routes::profile::get_profile,
        tests::{configure_with, FailingStore},
    };
    use actix_web::{http::header::ContentType, test, App};
    use db_connector::{memory::MemoryUserStore, StoreError};
    use diesel::result::{DatabaseErrorKind, Error::DatabaseError};

    #[actix_web::test]
    async fn test_create_then_get() {
        let store = Arc::new(MemoryUserStore::new());
        let app = App::new()
            .configure(configure_with(store.clone()))
            .configure(crate::routes::users::configure)
            .service(get_profile);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(ContentType::json())
            .set_payload(r#"{"name":"Ana","email":"a@x.com"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let created: UserSchema = test::read_body_json(resp).await;
        assert_eq!(created.name, "Ana");
        assert_eq!(created.email, "a@x.com");
        assert!(!created.is_admin);
        assert_eq!(store.len(), 1);

        let req = test::TestRequest::get()
            .uri(&format!("/profile/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let fetched: UserSchema = test::read_body_json(resp).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_client_id_is_ignored() {
        let store = Arc::new(MemoryUserStore::new());
        let app = App::new()
            .configure(configure_with(store.clone()))
            .service(create_user);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(ContentType::json())
            .set_payload(r#"{"id":77,"name":"Bo","email":"b@x.com","isAdmin":true,"extra":1}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({"id": 1, "name": "Bo", "email": "b@x.com", "isAdmin": true})
        );
    }

    #[actix_web::test]
    async fn test_invalid_body() {
        let store = Arc::new(MemoryUserStore::new());
        let app = App::new()
            .configure(configure_with(store.clone()))
            .service(create_user);
        let app = test::init_service(app).await;

        for payload in [
            "",
            "{not json",
            r#"{"name":"Ana","email":"a@x.com","isAdmin":"yes"}"#,
            r#"{"name":5,"email":"a@x.com"}"#,
            r#"["Ana","a@x.com"]"#,
            r#"["Ana","a@x.com",true]"#,
            r#""Ana""#,
            "null",
        ] {
            let req = test::TestRequest::post()
                .uri("/users")
                .insert_header(ContentType::json())
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "{payload}");
            let body = test::read_body(resp).await;
            assert!(!body.is_empty());
        }

        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_type_mismatch_message() {
        let app = App::new()
            .configure(configure_with(Arc::new(MemoryUserStore::new())))
            .service(create_user);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_payload(r#"{"name":"Ana","email":"a@x.com","isAdmin":"yes"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body = test::read_body(resp).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("invalid type"), "{body}");
    }

    #[actix_web::test]
    async fn test_missing_fields_are_empty() {
        let store = Arc::new(MemoryUserStore::new());
        let app = App::new()
            .configure(configure_with(store.clone()))
            .service(create_user);
        let app = test::init_service(app).await;

        for (payload, name, email) in [
            ("{}", "", ""),
            (r#"{"name":"Ana"}"#, "Ana", ""),
            (r#"{"name":null,"email":"a@x.com","isAdmin":null}"#, "", "a@x.com"),
        ] {
            let req = test::TestRequest::post()
                .uri("/users")
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200, "{payload}");
            let created: UserSchema = test::read_body_json(resp).await;
            assert_eq!(created.name, name);
            assert_eq!(created.email, email);
            assert!(!created.is_admin);
        }

        assert_eq!(store.len(), 3);
    }

    #[actix_web::test]
    async fn test_rejected_by_store() {
        let store = FailingStore {
            make_err: || {
                StoreError::Query(DatabaseError(
                    DatabaseErrorKind::NotNullViolation,
                    Box::new(String::from("null value in column \"email\"")),
                ))
            },
        };
        let app = App::new().configure(configure_with(store)).service(create_user);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_payload(r#"{"name":"Ana","email":"a@x.com"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body = test::read_body(resp).await;
        assert_eq!(body, "null value in column \"email\"");
    }

    #[actix_web::test]
    async fn test_store_failure() {
        let store = FailingStore {
            make_err: || StoreError::Query(diesel::result::Error::BrokenTransactionManager),
        };
        let app = App::new().configure(configure_with(store)).service(create_user);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_payload(r#"{"name":"Ana","email":"a@x.com"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
