use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validators;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDto {
    pub id: String,
    pub name: String,
    pub callback_urls: Vec<String>,
    pub logout_callback_urls: Vec<String>,
    pub is_public: bool,
    pub pkce_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClientDto {
    #[validate(length(min = 1, max = 50))]
    pub name: String,

    #[validate(custom(function = "validators::callback_urls"))]
    pub callback_urls: Vec<String>,

    #[validate(custom(function = "validators::callback_urls"))]
    pub logout_callback_urls: Vec<String>,

    pub is_public: bool,
    pub pkce_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateClientDto {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(custom(function = "validators::callback_urls"))]
    pub callback_urls: Option<Vec<String>>,

    #[validate(custom(function = "validators::callback_urls"))]
    pub logout_callback_urls: Option<Vec<String>>,

    pub is_public: Option<bool>,
    pub pkce_enabled: Option<bool>,
}
