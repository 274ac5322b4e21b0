pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid link config JSON: {message}")]
    InvalidConfigJson { message: String },

    #[error("Invalid link config JSON5: {message}")]
    InvalidConfigJson5 { message: String },

    #[error("Invalid link config YAML: {message}")]
    InvalidConfigYaml { message: String },

    #[error("Invalid `link.decorators` config: {message}")]
    InvalidDecorators { message: String },

    #[error("Invalid translation catalog: {message}")]
    InvalidTranslations { message: String },
}
