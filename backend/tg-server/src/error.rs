use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tg_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] tg_auth::AuthError),

    #[error("Invalid setting {setting}: {message}")]
    InvalidSetting { setting: &'static str, message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
