use thiserror::Error;

pub type ArcResult<T> = Result<T, ArcError>;

#[derive(Debug, Error)]
pub enum ArcError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid series: {0}")]
    InvalidSeries(String),

    #[error("unknown film: `{0}`")]
    UnknownFilm(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
