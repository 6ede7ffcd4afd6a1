use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No executable was given.")]
    MissingExecutable,

    #[error("Failed to launch `{}`: {}", .program, .original)]
    Launch {
        program: String,
        original: std::io::Error,
    },

    #[error("Error with sub process: {}", _0)]
    SubProcess(std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn launch_error(program: String, original: std::io::Error) -> Self {
        Self::Launch { program, original }
    }
}
