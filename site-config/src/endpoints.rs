use const_format::concatcp;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{ConfigError, Result};

/// Root path prefix shared by every api call, fixed for the lifetime of the process.
pub const API_BASE: &str = "/api";

pub const ITEMS_API: &str = concatcp!(API_BASE, "/items");
pub const LOANS_ACTIVE_API: &str = concatcp!(API_BASE, "/loans/active");
pub const LOANS_HISTORY_API: &str = concatcp!(API_BASE, "/loans/history");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Resource {
    Items,
    LoansActive,
    LoansHistory,
}

impl Resource {
    pub const fn suffix(self) -> &'static str {
        match self {
            Resource::Items => "items",
            Resource::LoansActive => "loans/active",
            Resource::LoansHistory => "loans/history",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| ConfigError::UnknownResource(name.to_string()))
    }
}

/// Immutable set of fully qualified api paths, resolved once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRegistry {
    base: String,
    paths: Vec<String>,
}

impl EndpointRegistry {
    pub fn new() -> Self {
        Self::build(API_BASE)
    }

    pub fn with_base(base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        if base.is_empty() {
            return Err(ConfigError::EmptyBasePath);
        }
        if !base.starts_with('/') {
            return Err(ConfigError::MissingLeadingSlash(base));
        }
        if base.ends_with('/') {
            return Err(ConfigError::TrailingSlash(base));
        }
        Ok(Self::build(&base))
    }

    fn build(base: &str) -> Self {
        let paths = Resource::iter()
            .map(|resource| format!("{}/{}", base, resource.suffix()))
            .collect();
        Self {
            base: base.to_string(),
            paths,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn path(&self, resource: Resource) -> &str {
        &self.paths[resource as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Resource, &str)> {
        Resource::iter().map(move |resource| (resource, self.path(resource)))
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::new()
    }
}
