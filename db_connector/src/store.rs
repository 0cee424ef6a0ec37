use std::sync::Arc;

use derive_more::{Display, Error, From};
use diesel::{
    r2d2::PoolError,
    result::{DatabaseErrorKind, Error::DatabaseError},
};

use crate::models::users::{NewUser, User};

/// Number of users returned per page.
pub const PAGE_SIZE: i64 = 10;

#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    #[display("Could not get a database connection: {_0}")]
    Connection(#[error(source)] PoolError),
    #[display("{_0}")]
    Query(#[error(source)] diesel::result::Error),
    #[display("No unused user id left")]
    #[from(skip)]
    IdsExhausted,
}

impl StoreError {
    /// Whether the database refused the row because it violates a constraint,
    /// as opposed to the database being unavailable or misbehaving.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Query(DatabaseError(
                DatabaseErrorKind::UniqueViolation
                    | DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::CheckViolation,
                _
            ))
        )
    }
}

/// A 1-indexed page of users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: i64,
}

impl Page {
    /// Returns `None` for page numbers below 1 and for pages whose offset
    /// does not fit into an `i64`.
    pub fn new(number: i64) -> Option<Self> {
        if number < 1 {
            return None;
        }
        (number - 1).checked_mul(PAGE_SIZE)?;

        Some(Self { number })
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1) * PAGE_SIZE
    }
}

/**
 * Data access for users. Implementations are blocking and get called from
 * the blocking thread pool of the web server.
 */
pub trait UserStore: Send + Sync {
    /// Returns `Ok(None)` if no user with this id exists.
    fn find_user(&self, id: i32) -> Result<Option<User>, StoreError>;

    /// Inserts the user and returns the stored row including its new id.
    fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Users on the given page, ordered by id.
    fn list_users(&self, page: Page) -> Result<Vec<User>, StoreError>;
}

impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    fn find_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        (**self).find_user(id)
    }

    fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        (**self).create_user(user)
    }

    fn list_users(&self, page: Page) -> Result<Vec<User>, StoreError> {
        (**self).list_users(page)
    }
}
