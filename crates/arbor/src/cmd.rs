//! Command registration.

use std::fmt;

use crate::flags::FlagSet;
use crate::handler::{CmdHandler, HandlerResult};

/// A terminal command: a name, a handler, and its own flag scope.
///
/// Commands are owned either by a [`Group`](crate::Group) or directly by the
/// [`App`](crate::App) (root commands). The handler is required at
/// construction time, so a handler-less command cannot exist.
pub struct Cmd {
    pub(crate) name: String,
    pub(crate) desc: String,
    pub(crate) run: CmdHandler,
    pub(crate) flags: FlagSet,
    /// Owning group name, stamped at registration. Used only for usage
    /// rendering, never for dispatch.
    pub(crate) group: Option<String>,
}

impl Cmd {
    /// Creates a command with the given name and handler.
    ///
    /// The handler receives the application scope, the group scope (`None`
    /// for root commands), and the command's own scope.
    pub fn new<F>(name: impl Into<String>, run: F) -> Self
    where
        F: FnMut(&FlagSet, Option<&FlagSet>, &FlagSet) -> HandlerResult + 'static,
    {
        let name = name.into();
        Self {
            flags: FlagSet::new(name.clone()),
            name,
            desc: String::new(),
            run: Box::new(run),
            group: None,
        }
    }

    /// Sets the description shown in usage output.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Returns the command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the command's flag scope.
    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// Returns the command's flag scope for declaring flags.
    pub fn flags_mut(&mut self) -> &mut FlagSet {
        &mut self.flags
    }
}

impl fmt::Debug for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cmd")
            .field("name", &self.name)
            .field("desc", &self.desc)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}
