//! Handler signatures.
//!
//! Handlers receive the parsed flag scopes that apply at their level and
//! nothing else: a command handler gets all three (the group scope is absent
//! for root commands), a group default gets two, the application default gets
//! one. Positional arguments live on the innermost scope via
//! [`FlagSet::args`](crate::FlagSet::args).
//!
//! Dispatch is one-shot and single-threaded, so handlers are boxed `FnMut`
//! closures: they can mutate captured state without interior mutability
//! wrappers.

use crate::flags::FlagSet;

/// What a handler returns. Success is silent; a failure is printed by the
/// process boundary before it exits non-zero.
pub type HandlerResult = Result<(), anyhow::Error>;

/// The application default handler, invoked when the scan finds neither a
/// group nor a command.
pub type AppHandler = Box<dyn FnMut(&FlagSet) -> HandlerResult>;

/// A group's default handler, invoked when the scan finds the group but no
/// command inside it.
pub type GroupHandler = Box<dyn FnMut(&FlagSet, &FlagSet) -> HandlerResult>;

/// A command handler. The middle scope is `None` for root commands.
pub type CmdHandler = Box<dyn FnMut(&FlagSet, Option<&FlagSet>, &FlagSet) -> HandlerResult>;
