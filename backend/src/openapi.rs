use utoipa::OpenApi;

use crate::{models, routes};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::hello::hello,
        routes::profile::get_profile,
        routes::users::create_user::create_user,
        routes::users::list_users::list_users,
    ),
    components(schemas(
        routes::hello::HelloSchema,
        models::user::UserSchema,
        models::user::CreateUserSchema,
    ))
)]
pub struct ApiDoc;
