//! Registry of well-formed accounts, keyed by name, in insertion order.

use std::collections::HashMap;

use crate::types::TwitterUser;

/// Maps account names to their records.
///
/// Iteration follows first-registration order, which is the tie-break order
/// for every "maximum over users" query.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<TwitterUser>,
    positions: HashMap<String, usize>,
}

impl UserRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user. A repeated name replaces the stored record but keeps
    /// its original position.
    pub fn insert(&mut self, user: TwitterUser) {
        match self.positions.get(&user.name) {
            Some(&pos) => self.users[pos] = user,
            None => {
                self.positions.insert(user.name.clone(), self.users.len());
                self.users.push(user);
            }
        }
    }

    /// Look up a user by name.
    pub fn get(&self, name: &str) -> Option<&TwitterUser> {
        self.positions.get(name).map(|&pos| &self.users[pos])
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// All users in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TwitterUser> {
        self.users.iter()
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True if no user is registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
