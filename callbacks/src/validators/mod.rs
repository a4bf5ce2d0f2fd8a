mod callback_url;
mod error;

pub use callback_url::{callback_url, callback_urls};
pub use error::flatten_errors;
