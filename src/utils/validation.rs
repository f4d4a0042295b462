use crate::utils::error::{EtlError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 檢查遠端儲存設定，只回傳警告訊息，不視為錯誤
pub fn store_config_warnings(store_url: Option<&str>, store_key: Option<&str>) -> Vec<String> {
    let mut warnings = Vec::new();

    match store_url {
        None => warnings.push("Missing VITE_SUPABASE_URL".to_string()),
        Some(url) if !url.starts_with("https://") => {
            warnings.push("Invalid VITE_SUPABASE_URL format".to_string())
        }
        Some(_) => {}
    }

    match store_key {
        None => warnings.push("Missing VITE_SUPABASE_ANON_KEY".to_string()),
        Some(key) if !key.starts_with("eyJ") => {
            warnings.push("Invalid VITE_SUPABASE_ANON_KEY format".to_string())
        }
        Some(_) => {}
    }

    warnings
}
