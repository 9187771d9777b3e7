//! The application root: registration and dispatch.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::process::ExitCode;

use crate::cmd::Cmd;
use crate::dispatch::classify;
use crate::error::{DispatchError, ParseError, RegistrationError, Scope};
use crate::flags::FlagSet;
use crate::group::Group;
use crate::handler::{AppHandler, HandlerResult};
use crate::usage;

/// The root of the command tree and the sole entry point for dispatch.
///
/// An `App` owns its groups, its root commands, and the application-level
/// flag scope. Registration happens once during setup; after that a single
/// call to [`dispatch`](App::dispatch) (or [`run`](App::run) at the process
/// boundary) resolves the argument list to exactly one handler.
///
/// Dispatch is single-threaded and one-shot: handlers are `FnMut` closures
/// and can mutate captured state directly.
///
/// ```no_run
/// use arbor::{App, Cmd, Group};
///
/// let mut app = App::new().description("Manage project containers");
/// app.flags_mut().string("p", "", "project name");
///
/// let mut container = Group::new("container").description("Manage containers");
/// let mut recreate = Cmd::new("recreate", |_app, _group, cmd| {
///     for name in cmd.args() {
///         println!("recreating {name}");
///     }
///     Ok(())
/// });
/// recreate.flags_mut().bool("f", false, "do not prompt");
/// container.add_command(recreate)?;
/// app.add_group(container)?;
///
/// let code = app.run();
/// # let _ = code;
/// # Ok::<(), arbor::RegistrationError>(())
/// ```
pub struct App {
    pub(crate) desc: String,
    pub(crate) default: Option<AppHandler>,
    pub(crate) flags: FlagSet,
    pub(crate) groups: HashMap<String, Group>,
    pub(crate) cmds: HashMap<String, Cmd>,
}

impl App {
    /// Creates an empty application.
    pub fn new() -> Self {
        Self {
            desc: String::new(),
            default: None,
            flags: FlagSet::new("app"),
            groups: HashMap::new(),
            cmds: HashMap::new(),
        }
    }

    /// Sets the description shown in usage output.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Sets the handler invoked when the argument list names neither a group
    /// nor a command. Without one, that case renders the application usage
    /// and succeeds.
    pub fn default<F>(mut self, run: F) -> Self
    where
        F: FnMut(&FlagSet) -> HandlerResult + 'static,
    {
        self.default = Some(Box::new(run));
        self
    }

    /// Returns the application flag scope.
    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// Returns the application flag scope for declaring flags.
    pub fn flags_mut(&mut self) -> &mut FlagSet {
        &mut self.flags
    }

    /// Adds or replaces a group. Replacement is last-write-wins by name.
    pub fn add_group(&mut self, group: Group) -> Result<(), RegistrationError> {
        if group.name.is_empty() {
            return Err(RegistrationError::EmptyGroupName);
        }
        self.groups.insert(group.name.clone(), group);
        Ok(())
    }

    /// Adds or replaces a root command, attached directly to the application
    /// and not part of any group.
    pub fn add_command(&mut self, cmd: Cmd) -> Result<(), RegistrationError> {
        if cmd.name.is_empty() {
            return Err(RegistrationError::EmptyCommandName);
        }
        self.cmds.insert(cmd.name.clone(), cmd);
        Ok(())
    }

    /// Returns a registered group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Returns a registered root command by name.
    pub fn command(&self, name: &str) -> Option<&Cmd> {
        self.cmds.get(name)
    }

    /// Resolves the argument list to one handler and invokes it.
    ///
    /// `argv[0]` is the program name and is never inspected. The scan picks
    /// the group and command positions, the ranges between them are parsed
    /// by their owning scopes, and the resolved handler runs with the parsed
    /// scopes. A scope that sees an undeclared `-h`/`-help` short-circuits
    /// to usage output on stdout and a successful return.
    ///
    /// The registry is read-only here except for flag binding and the
    /// `FnMut` handler call; call this once per process invocation.
    pub fn dispatch(&mut self, argv: &[String]) -> Result<(), DispatchError> {
        let res = classify(argv, self);
        let prog = argv.first().map(String::as_str).unwrap_or("");

        match (res.group_pos, res.cmd_pos) {
            // Group and command: three scopes, command handler.
            (Some(g), Some(c)) => {
                match self.flags.parse(&argv[1..g]) {
                    Err(ParseError::HelpRequested) => return usage::print_app_usage(self, prog),
                    Err(err) => return Err(DispatchError::parse(Scope::App, err)),
                    Ok(()) => {}
                }
                let group = self
                    .groups
                    .get_mut(&argv[g])
                    .expect("scan position refers to a registered group");
                match group.flags.parse(&argv[g + 1..c]) {
                    Err(ParseError::HelpRequested) => return usage::print_group_usage(group, prog),
                    Err(err) => return Err(DispatchError::parse(Scope::Group, err)),
                    Ok(()) => {}
                }
                let cmd = group
                    .cmds
                    .get_mut(&argv[c])
                    .expect("scan position refers to a registered command");
                match cmd.flags.parse(&argv[c + 1..]) {
                    Err(ParseError::HelpRequested) => return usage::print_cmd_usage(cmd, prog),
                    Err(err) => return Err(DispatchError::parse(Scope::Command, err)),
                    Ok(()) => {}
                }
                (cmd.run)(&self.flags, Some(&group.flags), &cmd.flags).map_err(DispatchError::Handler)
            }

            // Root command: two scopes, no group.
            (None, Some(c)) => {
                match self.flags.parse(&argv[1..c]) {
                    Err(ParseError::HelpRequested) => return usage::print_app_usage(self, prog),
                    Err(err) => return Err(DispatchError::parse(Scope::App, err)),
                    Ok(()) => {}
                }
                let cmd = self
                    .cmds
                    .get_mut(&argv[c])
                    .expect("scan position refers to a registered command");
                match cmd.flags.parse(&argv[c + 1..]) {
                    Err(ParseError::HelpRequested) => return usage::print_cmd_usage(cmd, prog),
                    Err(err) => return Err(DispatchError::parse(Scope::Command, err)),
                    Ok(()) => {}
                }
                (cmd.run)(&self.flags, None, &cmd.flags).map_err(DispatchError::Handler)
            }

            // Group without a command: the group default runs.
            (Some(g), None) => {
                match self.flags.parse(&argv[1..g]) {
                    Err(ParseError::HelpRequested) => return usage::print_app_usage(self, prog),
                    Err(err) => return Err(DispatchError::parse(Scope::App, err)),
                    Ok(()) => {}
                }
                let group = self
                    .groups
                    .get_mut(&argv[g])
                    .expect("scan position refers to a registered group");
                match group.flags.parse(&argv[g + 1..]) {
                    Err(ParseError::HelpRequested) => return usage::print_group_usage(group, prog),
                    Err(err) => return Err(DispatchError::parse(Scope::Group, err)),
                    Ok(()) => {}
                }
                match group.default.as_mut() {
                    Some(run) => run(&self.flags, &group.flags).map_err(DispatchError::Handler),
                    None => usage::print_group_usage(group, prog),
                }
            }

            // Neither: the whole range is application flags.
            (None, None) => {
                if argv.len() > 1 {
                    match self.flags.parse(&argv[1..]) {
                        Err(ParseError::HelpRequested) => return usage::print_app_usage(self, prog),
                        Err(err) => return Err(DispatchError::parse(Scope::App, err)),
                        Ok(()) => {}
                    }
                }
                match self.default.as_mut() {
                    Some(run) => run(&self.flags).map_err(DispatchError::Handler),
                    None => usage::print_app_usage(self, prog),
                }
            }
        }
    }

    /// Dispatches the process arguments and translates the outcome into an
    /// exit code: failures print to stderr and exit 1, success exits 0.
    ///
    /// This is the only place the crate touches ambient process state;
    /// [`dispatch`](App::dispatch) itself takes the tokens explicitly.
    pub fn run(&mut self) -> ExitCode {
        let argv: Vec<String> = env::args().collect();
        match self.dispatch(&argv) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        }
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut groups: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        groups.sort_unstable();
        let mut cmds: Vec<&str> = self.cmds.keys().map(String::as_str).collect();
        cmds.sort_unstable();
        f.debug_struct("App")
            .field("desc", &self.desc)
            .field("groups", &groups)
            .field("cmds", &cmds)
            .finish_non_exhaustive()
    }
}
