use std::error::Error;
use std::fmt::{Display, Formatter};

/// Hard failure of a single call. Aborts that call only; a missing feature or
/// recommendation is `None`, never one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// Receive or send on the underlying socket failed.
    Transport(String),
    /// An inbound frame could not be decoded into the call's request type.
    Decode(String),
    /// The peer went away before the call's message contract completed.
    UnexpectedEnd,
}

impl Display for CallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CallError::Transport(message) => write!(f, "transport failure: {}", message),
            CallError::Decode(message) => write!(f, "undecodable request frame: {}", message),
            CallError::UnexpectedEnd => write!(f, "peer closed the call mid-exchange"),
        }
    }
}

impl Error for CallError {}
