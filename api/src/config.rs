use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Basic auth credentials; authentication is skipped (with a warning)
    /// when either half is missing.
    pub basic_auth_user: Option<String>,
    pub basic_auth_pass: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            basic_auth_user: env::var("BASIC_AUTH_USER").ok(),
            basic_auth_pass: env::var("BASIC_AUTH_PASS").ok(),
        }
    }

    /// Configured basic auth credentials, when both are present.
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (&self.basic_auth_user, &self.basic_auth_pass) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}
