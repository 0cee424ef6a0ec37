use std::sync::{Mutex, MutexGuard};

use crate::{
    models::users::{NewUser, User},
    store::{Page, StoreError, UserStore},
};

struct Table {
    users: Vec<User>,
    next_id: i64,
}

/// [`UserStore`] keeping users in memory. Ids start at 1 and are never reused.
pub struct MemoryUserStore {
    table: Mutex<Table>,
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UserStore for MemoryUserStore {
    fn find_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        Ok(self.lock().users.iter().find(|u| u.id == id).cloned())
    }

    fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut table = self.lock();
        let id = i32::try_from(table.next_id).map_err(|_| StoreError::IdsExhausted)?;
        table.next_id += 1;
        let user = User {
            id,
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
        };
        table.users.push(user.clone());

        Ok(user)
    }

    fn list_users(&self, page: Page) -> Result<Vec<User>, StoreError> {
        // Rows are appended with increasing ids, so insertion order is id order.
        let users = self
            .lock()
            .users
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(users)
    }
}
