//! Token classification and scope partitioning.
//!
//! One left-to-right pass over the argument list decides which registered
//! group and command (if any) the invocation names, without backtracking.
//! Index 0 is the program name and is never inspected. Flag-shaped tokens
//! are opaque here; their values are parsed later by whichever scope owns
//! them.
//!
//! For each bare token the scan checks group membership first, so a name
//! registered as both a group and a root command resolves as the group.
//! Once a group is found, command membership is checked against that group
//! instead of the root commands. The scan stops at the first command match;
//! everything after it belongs to the command's argument range regardless of
//! content.

use crate::app::App;
use crate::flags::is_flag_shaped;

/// Where the scan found the group and command tokens, if anywhere.
///
/// The positions split the argument list into the three flag ranges:
/// application flags before the group, group flags between group and
/// command, command flags and arguments after the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Resolution {
    pub group_pos: Option<usize>,
    pub cmd_pos: Option<usize>,
}

pub(crate) fn classify(argv: &[String], app: &App) -> Resolution {
    let mut res = Resolution::default();
    let mut in_group = None;

    for (i, token) in argv.iter().enumerate().skip(1) {
        if is_flag_shaped(token) {
            continue;
        }

        if res.group_pos.is_none() {
            if let Some(group) = app.groups.get(token.as_str()) {
                res.group_pos = Some(i);
                in_group = Some(group);
                continue;
            }
        }

        let is_cmd = match in_group {
            Some(group) => group.cmds.contains_key(token.as_str()),
            None => app.cmds.contains_key(token.as_str()),
        };
        if res.cmd_pos.is_none() && is_cmd {
            res.cmd_pos = Some(i);
            break;
        }
    }

    res
}
