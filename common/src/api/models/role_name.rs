use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::Error;

pub const MAX_ROLE_NAME_LEN: usize = 128;

/// Name of a role, used as the final segment of the `role/<name>` storage
/// key. Must be non-empty ASCII without path separators so that a name can
/// never address anything outside the `role/` namespace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent, deny_unknown_fields)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(name: &str) -> Result<Self, Error> {
        if !name.is_ascii()
            || name.contains('/')
            || name.contains('\\')
            || name.len() > MAX_ROLE_NAME_LEN
            || name.is_empty()
        {
            Err(Error::InvalidRoleName)
        } else {
            Ok(RoleName(name.into()))
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for RoleName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleName::new(s)
    }
}

impl Deref for RoleName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<String> for RoleName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

impl Display for RoleName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<RoleName> for String {
    fn from(value: RoleName) -> Self {
        value.0
    }
}
