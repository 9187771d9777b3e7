//! Error types for registration, flag parsing, and dispatch.
//!
//! Registration problems are fatal to setup: a caller must not proceed to
//! dispatch with a malformed registry. Parse and handler failures abort one
//! dispatch and are surfaced to the process boundary, which decides the exit
//! behavior.

use std::fmt;

use thiserror::Error;

/// A setup-time registration failure.
///
/// The original implementation aborted on these; returning them instead lets
/// embedding applications recover from bad setup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// A group was registered with an empty name.
    #[error("cannot add group with empty name")]
    EmptyGroupName,
    /// A command was registered with an empty name.
    #[error("cannot add command with empty name")]
    EmptyCommandName,
}

/// A flag scope rejected its token sub-range.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A flag-shaped token names no declared flag.
    #[error("unknown flag: -{name}")]
    UnknownFlag {
        /// The flag name, without dashes.
        name: String,
    },
    /// A token looked like a flag but could not be read as one.
    #[error("bad flag syntax: {token}")]
    BadSyntax {
        /// The offending token, verbatim.
        token: String,
    },
    /// A non-boolean flag appeared without a value.
    #[error("flag -{name} requires a value")]
    MissingValue {
        /// The flag name, without dashes.
        name: String,
    },
    /// A flag value failed to parse into the declared type.
    #[error("invalid value {value:?} for flag -{name}")]
    InvalidValue {
        /// The flag name, without dashes.
        name: String,
        /// The rejected raw value.
        value: String,
        /// The underlying conversion error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// `-h` or `-help` was passed without being declared. The boundary maps
    /// this to usage output and a zero exit, not a failure.
    #[error("help requested")]
    HelpRequested,
}

/// The flag scope a dispatch error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Application-level flags (before the group or command token).
    App,
    /// Group-level flags (between the group and command tokens).
    Group,
    /// Command-level flags and arguments (after the command token).
    Command,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::App => write!(f, "application"),
            Scope::Group => write!(f, "group"),
            Scope::Command => write!(f, "command"),
        }
    }
}

/// A dispatch that did not reach a successful handler return.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// One of the three flag scopes rejected its sub-range. No handler ran.
    #[error("{scope} flags: {source}")]
    Parse {
        /// Which scope rejected its tokens.
        scope: Scope,
        /// The parse failure itself.
        #[source]
        source: ParseError,
    },
    /// The resolved handler returned a failure.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl DispatchError {
    pub(crate) fn parse(scope: Scope, source: ParseError) -> Self {
        DispatchError::Parse { scope, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnknownFlag { name: "x".into() };
        assert_eq!(err.to_string(), "unknown flag: -x");

        let err = ParseError::MissingValue { name: "p".into() };
        assert_eq!(err.to_string(), "flag -p requires a value");
    }

    #[test]
    fn test_dispatch_error_carries_scope() {
        let err = DispatchError::parse(Scope::Group, ParseError::UnknownFlag { name: "clean".into() });
        assert_eq!(err.to_string(), "group flags: unknown flag: -clean");
    }

    #[test]
    fn test_registration_error_display() {
        assert_eq!(
            RegistrationError::EmptyGroupName.to_string(),
            "cannot add group with empty name"
        );
    }
}
