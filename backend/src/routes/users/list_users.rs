use std::num::{IntErrorKind, ParseIntError};

use actix_web::{get, web, HttpResponse, Responder};
use db_connector::Page;

use crate::{
    error::Error,
    models::user::UserSchema,
    utils::{map_store_error, web_block_unpacked},
    AppState,
};

fn parse_page(page: &str) -> Result<Page, Error> {
    let number: i64 = page.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::PageOutOfRange,
        _ => Error::InvalidPage,
    })?;
    Page::new(number).ok_or(Error::PageOutOfRange)
}

/// List users, ten per page, ordered by id.
#[utoipa::path(
    params(
        ("page" = String, Path, description = "1-indexed page number.")
    ),
    responses(
        (status = 200, description = "Up to ten users", body = [UserSchema]),
        (status = 400, description = "The page is not a positive integer."),
        (status = 500)
    )
)]
#[get("/users/{page}")]
pub async fn list_users(
    state: web::Data<AppState>,
    page: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let page = parse_page(&page)?;

    let users = web_block_unpacked(move || state.store.list_users(page).map_err(map_store_error))
        .await?;

    let users: Vec<UserSchema> = users.into_iter().map(UserSchema::from).collect();
    Ok(HttpResponse::Ok().json(users))
}
