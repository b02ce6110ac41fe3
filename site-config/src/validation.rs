use crate::adapter::AdapterConfig;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Pages directory must not be empty")]
    EmptyPagesDir,
    #[error("Assets directory must not be empty")]
    EmptyAssetsDir,
    #[error("Fallback document must not be empty")]
    EmptyFallback,
    #[error("Fallback must be a bare document name: {0}")]
    FallbackNotADocument(String),
}

pub fn validate_adapter_config(config: &AdapterConfig) -> Result<(), ValidationError> {
    if config.pages_dir.is_empty() {
        return Err(ValidationError::EmptyPagesDir);
    }
    if config.assets_dir.is_empty() {
        return Err(ValidationError::EmptyAssetsDir);
    }
    if config.fallback_document.is_empty() {
        return Err(ValidationError::EmptyFallback);
    }
    if config.fallback_document.contains(['/', '\\']) {
        return Err(ValidationError::FallbackNotADocument(
            config.fallback_document.clone(),
        ));
    }
    Ok(())
}
