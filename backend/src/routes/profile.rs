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

use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    error::Error,
    models::user::UserSchema,
    utils::{map_store_error, parse_id, web_block_unpacked},
    AppState,
};

/// Get a single user by its id.
#[utoipa::path(
    params(
        ("id" = String, Path, description = "Id of the user. Must be an integer.")
    ),
    responses(
        (status = 200, description = "The user", body = UserSchema),
        (status = 400, description = "The id is not an integer."),
        (status = 404, description = "No user with this id exists."),
        (status = 500)
    )
)]
#[get("/profile/{id}")]
pub async fn get_profile(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let user_id = parse_id(&id)?;

    let user = web_block_unpacked(move || match state.store.find_user(user_id) {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(Error::UserDoesNotExist),
        Err(err) => Err(map_store_error(err)),
    })
    .await?;

    Ok(HttpResponse::Ok().json(UserSchema::from(user)))
}
