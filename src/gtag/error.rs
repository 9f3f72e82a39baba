use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GtagErrorCode {
    InvalidArgument,
    Dom,
    GlobalScope,
    TrackerUnbound,
}

impl GtagErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GtagErrorCode::InvalidArgument => "gtag/invalid-argument",
            GtagErrorCode::Dom => "gtag/dom",
            GtagErrorCode::GlobalScope => "gtag/global-scope",
            GtagErrorCode::TrackerUnbound => "gtag/tracker-unbound",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GtagError {
    pub code: GtagErrorCode,
    message: String,
}

impl GtagError {
    pub fn new(code: GtagErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for GtagError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for GtagError {}

pub type GtagResult<T> = Result<T, GtagError>;

pub fn invalid_argument(message: impl Into<String>) -> GtagError {
    GtagError::new(GtagErrorCode::InvalidArgument, message)
}

pub fn dom_error(message: impl Into<String>) -> GtagError {
    GtagError::new(GtagErrorCode::Dom, message)
}

pub fn global_scope_error(message: impl Into<String>) -> GtagError {
    GtagError::new(GtagErrorCode::GlobalScope, message)
}

pub fn tracker_unbound(function_name: &str) -> GtagError {
    GtagError::new(
        GtagErrorCode::TrackerUnbound,
        format!("No tracking function is bound to `{function_name}`"),
    )
}
