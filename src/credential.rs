//! API credential types.
//!
//! Defines the app key / app secret pair issued by the JD Union platform.
//! The secret is never transmitted; it only feeds the request signature.

/// Credentials for the JD Union open platform.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub app_key: String,
    pub app_secret: String,
}

impl Credentials {
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }
}
