use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::users::repo_types::{NewUser, User};

/// Collection of user records, in insertion order.
pub trait UserStore: Send + Sync {
    /// All records, oldest first.
    fn list(&self) -> anyhow::Result<Vec<User>>;

    fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;

    /// Exact, case-sensitive match on both fields. Placeholder check only.
    fn find_by_credentials(&self, username: &str, password: &str) -> anyhow::Result<Option<User>>;

    /// Appends a record with `id = max(existing ids, 0) + 1`.
    fn create(&self, new: NewUser) -> anyhow::Result<User>;

    /// Removes the record and returns it; the rest keep their relative order.
    fn delete(&self, id: i64) -> anyhow::Result<Option<User>>;
}

/// Process-lifetime store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: RwLock<Vec<User>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> anyhow::Result<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| anyhow::anyhow!("user store lock poisoned"))
    }

    fn write(&self) -> anyhow::Result<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| anyhow::anyhow!("user store lock poisoned"))
    }
}

impl UserStore for InMemoryUsers {
    fn list(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        Ok(self.read()?.iter().find(|u| u.id == id).cloned())
    }

    fn find_by_credentials(&self, username: &str, password: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .read()?
            .iter()
            .find(|u| {
                u.username.as_deref() == Some(username) && u.password.as_deref() == Some(password)
            })
            .cloned())
    }

    fn create(&self, new: NewUser) -> anyhow::Result<User> {
        // Max and append happen under one write lock so concurrent creates never share an ID.
        let mut users = self.write()?;
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User::from_new(id, new);
        users.push(user.clone());
        debug!(user_id = id, total = users.len(), "user stored");
        Ok(user)
    }

    fn delete(&self, id: i64) -> anyhow::Result<Option<User>> {
        let mut users = self.write()?;
        let index = users.iter().position(|u| u.id == id);
        let removed = index.map(|i| users.remove(i));
        if removed.is_some() {
            debug!(user_id = id, total = users.len(), "user removed");
        }
        Ok(removed)
    }
}
