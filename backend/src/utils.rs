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

use std::num::{IntErrorKind, ParseIntError};

use actix_web::web;
use db_connector::StoreError;

use crate::error::Error;

/// Run a blocking store call on the blocking thread pool.
pub async fn web_block_unpacked<F, R>(f: F) -> Result<R, actix_web::Error>
where
    F: FnOnce() -> Result<R, Error> + Send + 'static,
    R: Send + 'static,
{
    match web::block(f).await {
        Ok(res) => match res {
            Ok(v) => Ok(v),
            Err(err) => Err(err.into()),
        },
        Err(_err) => Err(Error::InternalError.into()),
    }
}

/// Constraint violations are the client's fault, everything else is ours.
pub fn map_store_error(err: StoreError) -> Error {
    if err.is_rejection() {
        return Error::UserRejected(err.to_string());
    }

    log::error!("Store operation failed: {err}");
    Error::InternalError
}

/// Ids are `INT4`, so an integer outside of `i32` can not belong to any user.
pub fn parse_id(id: &str) -> Result<i32, Error> {
    id.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::UserDoesNotExist,
        _ => Error::InvalidId,
    })
}
