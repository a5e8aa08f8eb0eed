use crate::utils::error::{OfferError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(OfferError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(OfferError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(OfferError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OfferError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects values that still contain an unresolved `${VAR}` placeholder.
pub fn validate_resolved(field_name: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(OfferError::MissingConfigError {
            field: format!("{} (unresolved placeholder {})", field_name, value),
        });
    }
    Ok(())
}

/// Table names go into the request path, so only plain identifiers are accepted.
pub fn validate_table_name(field_name: &str, table: &str) -> Result<()> {
    validate_non_empty_string(field_name, table)?;

    if !table
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(OfferError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: table.to_string(),
            reason: "Table name can only contain letters, digits and underscores".to_string(),
        });
    }
    Ok(())
}
