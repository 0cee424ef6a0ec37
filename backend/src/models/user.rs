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

use db_connector::models::users::{NewUser, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSchema {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for UserSchema {
    fn from(value: User) -> Self {
        UserSchema {
            id: value.id,
            name: value.name,
            email: value.email,
            is_admin: value.is_admin,
        }
    }
}

/// Payload for creating a user. An `id` sent by the client is ignored.
/// Missing or null fields become empty strings and `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserSchema {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

impl From<CreateUserSchema> for NewUser {
    fn from(value: CreateUserSchema) -> Self {
        NewUser {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            is_admin: value.is_admin.unwrap_or_default(),
        }
    }
}
