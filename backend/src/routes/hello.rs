use actix_web::{get, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HelloSchema {
    pub hello: String,
    pub foo: String,
}

/// Static response, usable as a liveness check.
#[utoipa::path(
    responses(
        (status = 200, body = HelloSchema)
    )
)]
#[get("/json")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(HelloSchema {
        hello: "world".to_string(),
        foo: "bar".to_string(),
    })
}
