/*!
 * Owner and group name resolution
 */

use std::collections::HashMap;

use crate::bail;
use crate::error::Result;

/// Maps numeric user and group IDs to display names
pub trait NameResolver {
    /// Name of the user with `uid`
    fn user_name(&self, uid: u32) -> Result<String>;

    /// Name of the group with `gid`
    fn group_name(&self, gid: u32) -> Result<String>;
}

/// Resolver backed by the system user and group databases
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNames;

impl NameResolver for SystemNames {
    fn user_name(&self, uid: u32) -> Result<String> {
        match uzers::get_user_by_uid(uid) {
            Some(user) => Ok(user.name().to_string_lossy().into_owned()),
            None => bail!(Lookup, "getpwuid(): uid not found: {}", uid),
        }
    }

    fn group_name(&self, gid: u32) -> Result<String> {
        match uzers::get_group_by_gid(gid) {
            Some(group) => Ok(group.name().to_string_lossy().into_owned()),
            None => bail!(Lookup, "getgrgid(): gid not found: {}", gid),
        }
    }
}

/// Resolver over fixed tables, for listings that must not depend on the host
#[derive(Debug, Default, Clone)]
pub struct StaticNames {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl StaticNames {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user name
    pub fn with_user(mut self, uid: u32, name: impl Into<String>) -> Self {
        self.users.insert(uid, name.into());
        self
    }

    /// Register a group name
    pub fn with_group(mut self, gid: u32, name: impl Into<String>) -> Self {
        self.groups.insert(gid, name.into());
        self
    }
}

impl NameResolver for StaticNames {
    fn user_name(&self, uid: u32) -> Result<String> {
        match self.users.get(&uid) {
            Some(name) => Ok(name.clone()),
            None => bail!(Lookup, "getpwuid(): uid not found: {}", uid),
        }
    }

    fn group_name(&self, gid: u32) -> Result<String> {
        match self.groups.get(&gid) {
            Some(name) => Ok(name.clone()),
            None => bail!(Lookup, "getgrgid(): gid not found: {}", gid),
        }
    }
}
