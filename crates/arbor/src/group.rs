//! Group registration.

use std::collections::HashMap;
use std::fmt;

use crate::cmd::Cmd;
use crate::error::RegistrationError;
use crate::flags::FlagSet;
use crate::handler::{GroupHandler, HandlerResult};

/// A named group of commands with its own flag scope.
///
/// When dispatch resolves a group but no command inside it, the group's
/// default handler runs. A group without an explicit default renders its own
/// usage and succeeds.
pub struct Group {
    pub(crate) name: String,
    pub(crate) desc: String,
    pub(crate) default: Option<GroupHandler>,
    pub(crate) cmds: HashMap<String, Cmd>,
    pub(crate) flags: FlagSet,
}

impl Group {
    /// Creates an empty group with the given name.
    ///
    /// The name is validated when the group is added to an
    /// [`App`](crate::App), not here, so a fluent setup chain stays
    /// uninterrupted.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            flags: FlagSet::new(name.clone()),
            name,
            desc: String::new(),
            default: None,
            cmds: HashMap::new(),
        }
    }

    /// Sets the description shown in usage output.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Sets the handler invoked when the group is named without a command.
    ///
    /// It receives the application scope and the group scope.
    pub fn default<F>(mut self, run: F) -> Self
    where
        F: FnMut(&FlagSet, &FlagSet) -> HandlerResult + 'static,
    {
        self.default = Some(Box::new(run));
        self
    }

    /// Adds or replaces a command in this group.
    ///
    /// Replacement is last-write-wins by name. The command is stamped with
    /// this group's name for usage rendering.
    pub fn add_command(&mut self, mut cmd: Cmd) -> Result<(), RegistrationError> {
        if cmd.name.is_empty() {
            return Err(RegistrationError::EmptyCommandName);
        }
        cmd.group = Some(self.name.clone());
        self.cmds.insert(cmd.name.clone(), cmd);
        Ok(())
    }

    /// Returns the group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group's flag scope.
    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// Returns the group's flag scope for declaring flags.
    pub fn flags_mut(&mut self) -> &mut FlagSet {
        &mut self.flags
    }

    /// Returns a command in this group by name.
    pub fn command(&self, name: &str) -> Option<&Cmd> {
        self.cmds.get(name)
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.cmds.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Group")
            .field("name", &self.name)
            .field("desc", &self.desc)
            .field("cmds", &names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_command_stamps_group() {
        let mut group = Group::new("container");
        group
            .add_command(Cmd::new("recreate", |_, _, _| Ok(())))
            .unwrap();

        assert_eq!(group.command("recreate").unwrap().group.as_deref(), Some("container"));
    }

    #[test]
    fn test_add_command_empty_name() {
        let mut group = Group::new("container");
        let err = group.add_command(Cmd::new("", |_, _, _| Ok(()))).unwrap_err();
        assert_eq!(err, RegistrationError::EmptyCommandName);
    }

    #[test]
    fn test_add_command_replaces_by_name() {
        let mut group = Group::new("container");
        group
            .add_command(Cmd::new("logs", |_, _, _| Ok(())).description("old"))
            .unwrap();
        group
            .add_command(Cmd::new("logs", |_, _, _| Ok(())).description("new"))
            .unwrap();

        assert_eq!(group.cmds.len(), 1);
        assert_eq!(group.command("logs").unwrap().desc, "new");
    }
}
