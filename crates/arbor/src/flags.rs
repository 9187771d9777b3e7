//! Named, typed flag scopes.
//!
//! A [`FlagSet`] is one level's worth of flags: the application, a group, and
//! a command each own an independent instance, and each instance parses only
//! its own sub-range of the argument list. The dispatcher decides where each
//! sub-range starts and ends; the flag set never sees tokens that belong to
//! another scope.
//!
//! # Parse rules
//!
//! - A token is flag-shaped when it is at least two characters long and
//!   starts with `-`. A lone `-` is an ordinary argument.
//! - One or two leading dashes are equivalent: `-f` and `--f` name the same
//!   flag.
//! - `-name=value` binds the value inline. Non-boolean flags without an
//!   inline value consume the next token. Boolean flags are set to `true` by
//!   presence and take explicit values only through the `=` form.
//! - `--` ends flag parsing; everything after it is positional.
//! - The first non-flag token ends flag parsing; it and every token after it
//!   become positional arguments, available through [`FlagSet::args`].

use std::collections::HashMap;

use crate::error::ParseError;

/// The value held by a declared flag.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    /// A boolean switch.
    Bool(bool),
    /// A string value.
    Str(String),
    /// A signed integer value.
    Int(i64),
}

#[derive(Debug, Clone)]
struct Flag {
    usage: String,
    value: FlagValue,
    set: bool,
}

/// An independent set of declared, typed flags.
///
/// Declare flags before dispatch, then read their bound values from inside a
/// handler:
///
/// ```
/// use arbor::FlagSet;
///
/// let mut fs = FlagSet::new("recreate");
/// fs.bool("f", false, "do not prompt before recreating");
/// fs.parse(&["-f".into(), "nginx".into()])?;
///
/// assert_eq!(fs.get_bool("f"), Some(true));
/// assert_eq!(fs.args(), ["nginx"]);
/// # Ok::<(), arbor::ParseError>(())
/// ```
#[derive(Debug)]
pub struct FlagSet {
    name: String,
    flags: HashMap<String, Flag>,
    args: Vec<String>,
}

impl FlagSet {
    /// Creates an empty flag set. The name shows up in usage text.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: HashMap::new(),
            args: Vec::new(),
        }
    }

    /// Returns the name this scope was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declares a boolean flag. Re-declaring a name replaces the previous
    /// declaration.
    pub fn bool(&mut self, name: impl Into<String>, default: bool, usage: impl Into<String>) -> &mut Self {
        self.declare(name.into(), FlagValue::Bool(default), usage.into())
    }

    /// Declares a string flag.
    pub fn string(
        &mut self,
        name: impl Into<String>,
        default: impl Into<String>,
        usage: impl Into<String>,
    ) -> &mut Self {
        self.declare(name.into(), FlagValue::Str(default.into()), usage.into())
    }

    /// Declares an integer flag.
    pub fn int(&mut self, name: impl Into<String>, default: i64, usage: impl Into<String>) -> &mut Self {
        self.declare(name.into(), FlagValue::Int(default), usage.into())
    }

    fn declare(&mut self, name: String, value: FlagValue, usage: String) -> &mut Self {
        self.flags.insert(name, Flag { usage, value, set: false });
        self
    }

    /// Parses one token sub-range against the declared flags.
    ///
    /// On success the bound values are available through the `get_*`
    /// accessors and leftover tokens through [`args`](Self::args). A failure
    /// leaves the scope partially bound and should abort the dispatch.
    pub fn parse(&mut self, tokens: &[String]) -> Result<(), ParseError> {
        self.args.clear();

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];

            if token == "--" {
                self.args.extend(tokens[i + 1..].iter().cloned());
                break;
            }
            if !is_flag_shaped(token) {
                self.args.extend(tokens[i..].iter().cloned());
                break;
            }

            let body = token
                .strip_prefix("--")
                .or_else(|| token.strip_prefix('-'))
                .unwrap_or(token);
            let (name, inline) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (body, None),
            };
            if name.is_empty() || name.starts_with('-') {
                return Err(ParseError::BadSyntax { token: token.clone() });
            }

            let Some(flag) = self.flags.get_mut(name) else {
                if name == "help" || name == "h" {
                    return Err(ParseError::HelpRequested);
                }
                return Err(ParseError::UnknownFlag { name: name.to_string() });
            };

            match &flag.value {
                FlagValue::Bool(_) => {
                    let value = match inline {
                        Some(raw) => raw.parse::<bool>().map_err(|err| ParseError::InvalidValue {
                            name: name.to_string(),
                            value: raw,
                            source: Box::new(err),
                        })?,
                        None => true,
                    };
                    flag.value = FlagValue::Bool(value);
                }
                FlagValue::Str(_) => {
                    let raw = match inline {
                        Some(raw) => raw,
                        None => {
                            i += 1;
                            next_value(tokens, i, name)?
                        }
                    };
                    flag.value = FlagValue::Str(raw);
                }
                FlagValue::Int(_) => {
                    let raw = match inline {
                        Some(raw) => raw,
                        None => {
                            i += 1;
                            next_value(tokens, i, name)?
                        }
                    };
                    let value = raw.parse::<i64>().map_err(|err| ParseError::InvalidValue {
                        name: name.to_string(),
                        value: raw,
                        source: Box::new(err),
                    })?;
                    flag.value = FlagValue::Int(value);
                }
            }
            flag.set = true;
            i += 1;
        }

        Ok(())
    }

    /// Returns the bound value of a boolean flag, or `None` if the name is
    /// not declared as one.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.flags.get(name)?.value {
            FlagValue::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the bound value of a string flag.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match &self.flags.get(name)?.value {
            FlagValue::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the bound value of an integer flag.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.flags.get(name)?.value {
            FlagValue::Int(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the bound value of any declared flag, regardless of type.
    pub fn value(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name).map(|f| &f.value)
    }

    /// Returns true if the flag was explicitly set during parsing, as
    /// opposed to still holding its default.
    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).map(|f| f.set).unwrap_or(false)
    }

    /// Returns the leftover positional arguments, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the number of declared flags.
    pub fn count(&self) -> usize {
        self.flags.len()
    }

    /// Visits every declared flag as `(name, usage)` in lexicographic order.
    ///
    /// Storage is a hash map; the sort here is what makes usage output
    /// deterministic.
    pub fn visit_all(&self, mut f: impl FnMut(&str, &str)) {
        let mut names: Vec<&str> = self.flags.keys().map(String::as_str).collect();
        names.sort_unstable();
        for name in names {
            f(name, &self.flags[name].usage);
        }
    }
}

/// Returns true for tokens the dispatcher and the parser treat as flags:
/// length two or more, first character `-`.
pub(crate) fn is_flag_shaped(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('-')
}

fn next_value(tokens: &[String], i: usize, name: &str) -> Result<String, ParseError> {
    tokens.get(i).cloned().ok_or_else(|| ParseError::MissingValue {
        name: name.to_string(),
    })
}
