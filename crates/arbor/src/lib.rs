//! Grouped command dispatch with three independent flag scopes.
//!
//! `arbor` routes a flat argument list through a two-level command tree:
//! an [`App`] holds groups and root commands, a [`Group`] holds commands,
//! and every level owns its own [`FlagSet`]. A single left-to-right scan
//! classifies each token as a flag, a group name, or a command name, then
//! splits the list into up to three sub-ranges:
//!
//! ```text
//! prog  -p myproject  container  -clean  recreate  -f nginx
//!       ~~~~~~~~~~~~  =========  ~~~~~~  ========  ~~~~~~~~
//!       app flags     group      group   command   command flags
//!                                flags             and arguments
//! ```
//!
//! Each scope parses only its own sub-range, and the resolved handler is
//! invoked with the parsed scopes. When no command is named, dispatch falls
//! back to the group's default handler, or the application's, or usage
//! output; there is no unresolved case.
//!
//! # Building an application
//!
//! ```no_run
//! use arbor::{App, Cmd, Group};
//!
//! let mut app = App::new().description("Manage project containers");
//! app.flags_mut().string("p", "", "project name");
//!
//! let mut container = Group::new("container").description("Manage containers");
//! container.flags_mut().bool("clean", false, "remove stale state first");
//!
//! let mut recreate = Cmd::new("recreate", |app, group, cmd| {
//!     let project = app.get_str("p").unwrap_or("");
//!     let clean = group.and_then(|g| g.get_bool("clean")).unwrap_or(false);
//!     println!("recreating {:?} (project {project:?}, clean {clean})", cmd.args());
//!     Ok(())
//! })
//! .description("Stop, remove and start containers");
//! recreate.flags_mut().bool("f", false, "do not prompt before recreating");
//!
//! container.add_command(recreate)?;
//! app.add_group(container)?;
//!
//! let code = app.run();
//! # let _ = code;
//! # Ok::<(), arbor::RegistrationError>(())
//! ```
//!
//! Registration is setup-time only and returns [`RegistrationError`] for a
//! malformed entry; re-registering a name replaces the previous entry.
//! Dispatch itself never reads ambient process state: [`App::dispatch`]
//! takes the token list as a parameter, and only [`App::run`] touches
//! `std::env::args`.

mod app;
mod cmd;
mod dispatch;
mod error;
mod flags;
mod group;
mod handler;
mod usage;

pub use app::App;
pub use cmd::Cmd;
pub use error::{DispatchError, ParseError, RegistrationError, Scope};
pub use flags::{FlagSet, FlagValue};
pub use group::Group;
pub use handler::{AppHandler, CmdHandler, GroupHandler, HandlerResult};
pub use usage::{write_app_usage, write_cmd_usage, write_group_usage};
