use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ExpDistError>;

#[derive(Debug, thiserror::Error)]
pub enum ExpDistError {
    #[error("unsupported format '{0}', must be one of float16, float32, float64")]
    UnsupportedFormat(String),

    #[error("no data found in input or input empty")]
    EmptyInput,

    #[error("input length {len} is not a multiple of the {width}-byte element width")]
    MisalignedInput { len: usize, width: usize },

    #[error("input contains no normal values (only zeros, subnormals, infinities or NaNs)")]
    NoNormalValues,

    #[error("could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to (de)serialize report: {0}")]
    Serialization(#[from] bincode::Error),
}
