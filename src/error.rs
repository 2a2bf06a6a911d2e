use thiserror::Error;

/// Problems found while validating a catalog at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no tools")]
    Empty,

    #[error("tool with empty id (name: {0})")]
    EmptyId(String),

    #[error("duplicate tool id: {0}")]
    DuplicateTool(String),

    #[error("tool '{tool}' declares input '{input}' more than once")]
    DuplicateInput { tool: String, input: String },

    #[error("tool '{0}' has a blank prompt template")]
    BlankPrompt(String),

    #[error("choice input '{input}' of tool '{tool}' declares no choices")]
    MissingChoices { tool: String, input: String },

    #[error("input '{input}' of tool '{tool}' declares choices but is not a choice input")]
    UnexpectedChoices { tool: String, input: String },

    #[error("fixed value '{value}' of input '{input}' (tool '{tool}') is not one of its choices")]
    FixedNotAChoice {
        tool: String,
        input: String,
        value: String,
    },
}

/// Failures talking to the remote text-generation service.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by the dispatcher to its caller.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("tool '{tool}' has no input named '{input}'")]
    UnknownInput { tool: String, input: String },

    #[error("input '{0}' is read-only")]
    ReadOnlyInput(String),

    #[error("'{value}' is not a valid choice for '{input}' (expected one of: {choices})")]
    InvalidChoice {
        input: String,
        value: String,
        choices: String,
    },

    #[error("input '{input}' expects a number, got '{value}'")]
    InvalidNumber { input: String, value: String },

    #[error("there is no text result to copy")]
    NothingToCopy,

    #[error("clipboard error: {0}")]
    Clipboard(String),
}
