#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("Config error: {0}")]
    Config(#[from] envconfig::Error),
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
    #[error("Invalid host {0}")]
    InvalidHost(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
