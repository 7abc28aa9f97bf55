use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("page {requested} does not exist; expected 1..={total_pages}")]
    InvalidPageRequest { requested: i64, total_pages: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{command}' expects a page number")]
    MissingArgument { command: String },
    #[error("'{value}' is not a page number")]
    InvalidArgument { value: String },
}
