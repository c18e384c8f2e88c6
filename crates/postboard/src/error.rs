#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    #[error("Failed to parse response from {url}: {message}")]
    Decode { url: String, message: String },
}
