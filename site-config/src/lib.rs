pub mod adapter;
pub mod endpoints;
pub mod error;
pub mod validation;

pub use adapter::{AdapterConfig, FailurePolicy, PrerenderPolicy};
pub use endpoints::{
    EndpointRegistry, Resource, API_BASE, ITEMS_API, LOANS_ACTIVE_API, LOANS_HISTORY_API,
};
pub use error::{ConfigError, Result};
pub use validation::{validate_adapter_config, ValidationError};
