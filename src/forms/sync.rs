use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// JSON payload accepted by the seed endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct SeedSkusForm {
    #[validate(length(min = 1))]
    pub skus: Vec<String>,
}

/// Validated seed request: a non-empty ordered list of SKUs.
///
/// Empty identifier strings are dropped here, upstream of the source
/// client, which does not validate them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSkusPayload {
    pub skus: Vec<String>,
}

#[derive(Debug, Error)]
pub enum SeedSkusFormError {
    #[error("Seed form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for SeedSkusFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<SeedSkusForm> for SeedSkusPayload {
    type Error = SeedSkusFormError;

    fn try_from(value: SeedSkusForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            skus: value
                .skus
                .into_iter()
                .filter(|sku| !sku.is_empty())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sku_list_is_rejected() {
        let form = SeedSkusForm { skus: vec![] };

        let payload: Result<SeedSkusPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn empty_identifier_strings_are_dropped() {
        let form = SeedSkusForm {
            skus: vec!["103580".into(), String::new(), "103613".into()],
        };

        let payload: SeedSkusPayload = form.try_into().unwrap();
        assert_eq!(payload.skus, vec!["103580".to_string(), "103613".into()]);
    }
}
