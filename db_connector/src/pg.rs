use diesel::prelude::*;

use crate::{
    models::users::{NewUser, User},
    store::{Page, StoreError, UserStore},
    Pool,
};

/// [`UserStore`] backed by the `users` table.
pub struct PgUserStore {
    pool: Pool,
}

impl PgUserStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

impl UserStore for PgUserStore {
    fn find_user(&self, user_id: i32) -> Result<Option<User>, StoreError> {
        use crate::schema::users::dsl::*;

        let mut conn = self.pool.get()?;
        let user = users
            .find(user_id)
            .select(User::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(user)
    }

    fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        use crate::schema::users::dsl::*;

        let mut conn = self.pool.get()?;
        let user = diesel::insert_into(users)
            .values(&user)
            .returning(User::as_returning())
            .get_result(&mut conn)?;
        log::debug!("Created user {}", user.id);

        Ok(user)
    }

    fn list_users(&self, page: Page) -> Result<Vec<User>, StoreError> {
        use crate::schema::users::dsl::*;

        let mut conn = self.pool.get()?;
        let result = users
            .order(id.asc())
            .limit(page.limit())
            .offset(page.offset())
            .select(User::as_select())
            .load(&mut conn)?;

        Ok(result)
    }
}
