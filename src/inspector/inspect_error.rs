#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("unexpected HTTP status {0}")]
    HttpError(u16),

    #[error(transparent)]
    AnyError(#[from] anyhow::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    MimeParseError(#[from] mime::FromStrError),
}
