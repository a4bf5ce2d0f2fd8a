use core::result::Result;
use validator::ValidationError;

use crate::utils::validate_callback_url_pattern;

pub fn callback_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("callback_url"));
    }
    match validate_callback_url_pattern(value) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("callback_url")),
    }
}

pub fn callback_urls(items: &Vec<String>) -> Result<(), ValidationError> {
    match items.iter().all(|item| callback_url(item).is_ok()) {
        true => Ok(()),
        false => Err(ValidationError::new("callback_url")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_url_valid() {
        assert!(callback_url("https://example.com/callback").is_ok());
        assert!(callback_url("https://*.example.com/**/callback").is_ok());
        assert!(callback_url("http://localhost/callback").is_ok());
        assert!(callback_url("*").is_ok());
    }

    #[test]
    fn test_callback_url_invalid() {
        assert!(callback_url("/callback").is_err());
        assert!(callback_url("https//example.com/callback").is_err());
        assert!(callback_url("https://[::1/callback").is_err());
        assert!(callback_url("").is_err());
    }

    #[test]
    fn test_callback_urls_list() {
        let items = vec![
            "https://example.com/callback".to_string(),
            "http://127.0.0.1/callback".to_string(),
        ];
        assert!(callback_urls(&items).is_ok());
        assert!(callback_urls(&Vec::new()).is_ok());

        let items = vec![
            "https://example.com/callback".to_string(),
            "not a pattern".to_string(),
        ];
        assert!(callback_urls(&items).is_err());
    }
}
