//! Plain-text usage rendering.
//!
//! Default handlers and `-help` interception end up here. The writers take
//! any [`io::Write`] so tests can render into a buffer; the `print_*`
//! wrappers bind them to stdout for the dispatch paths.
//!
//! Group and command registries are hash maps with no iteration order;
//! every listing below sorts names lexicographically so the output is
//! deterministic.

use std::io::{self, Write};

use crate::app::App;
use crate::cmd::Cmd;
use crate::error::DispatchError;
use crate::flags::FlagSet;
use crate::group::Group;

/// Renders the application usage: options, groups ("Management Commands"),
/// and root commands.
pub fn write_app_usage(app: &App, prog: &str, w: &mut dyn Write) -> io::Result<()> {
    let opt = if app.flags.count() > 0 { " [OPTIONS]" } else { "" };
    writeln!(w)?;
    writeln!(w, "Usage: {prog}{opt} COMMAND")?;

    if !app.desc.is_empty() {
        writeln!(w)?;
        writeln!(w, "{}", app.desc)?;
    }

    write_options(&app.flags, w)?;

    if !app.groups.is_empty() {
        writeln!(w)?;
        writeln!(w, "Management Commands:")?;
        let mut rows: Vec<(String, String)> = app
            .groups
            .values()
            .map(|g| (g.name.clone(), g.desc.clone()))
            .collect();
        rows.sort();
        write_rows(&rows, w)?;
    }

    if !app.cmds.is_empty() {
        writeln!(w)?;
        writeln!(w, "Commands:")?;
        let mut rows: Vec<(String, String)> = app
            .cmds
            .values()
            .map(|c| (c.name.clone(), c.desc.clone()))
            .collect();
        rows.sort();
        write_rows(&rows, w)?;
    }

    writeln!(w)?;
    writeln!(w, "Run '{prog} COMMAND --help' for more information on a command.")
}

/// Renders a group's usage: its options and its commands.
pub fn write_group_usage(group: &Group, prog: &str, w: &mut dyn Write) -> io::Result<()> {
    let opt = if group.flags.count() > 0 { " [OPTIONS]" } else { "" };
    writeln!(w)?;
    writeln!(w, "Usage: {prog} {}{opt} COMMAND", group.name)?;

    if !group.desc.is_empty() {
        writeln!(w)?;
        writeln!(w, "{}", group.desc)?;
    }

    write_options(&group.flags, w)?;

    if !group.cmds.is_empty() {
        writeln!(w)?;
        writeln!(w, "Commands:")?;
        let mut rows: Vec<(String, String)> = group
            .cmds
            .values()
            .map(|c| (c.name.clone(), c.desc.clone()))
            .collect();
        rows.sort();
        write_rows(&rows, w)?;
    }

    writeln!(w)?;
    writeln!(
        w,
        "Run '{prog} {} COMMAND --help' for more information on a command.",
        group.name
    )
}

/// Renders a command's usage, prefixed with its owning group when it has one.
pub fn write_cmd_usage(cmd: &Cmd, prog: &str, w: &mut dyn Write) -> io::Result<()> {
    let opt = if cmd.flags.count() > 0 { " [OPTIONS]" } else { "" };
    writeln!(w)?;
    match &cmd.group {
        Some(group) => writeln!(w, "Usage: {prog} {group} {}{opt} [PARAMS...]", cmd.name)?,
        None => writeln!(w, "Usage: {prog} {}{opt} [PARAMS...]", cmd.name)?,
    }

    if !cmd.desc.is_empty() {
        writeln!(w)?;
        writeln!(w, "{}", cmd.desc)?;
    }

    write_options(&cmd.flags, w)
}

fn write_options(flags: &FlagSet, w: &mut dyn Write) -> io::Result<()> {
    if flags.count() == 0 {
        return Ok(());
    }
    let mut rows: Vec<(String, String)> = Vec::with_capacity(flags.count());
    flags.visit_all(|name, usage| rows.push((format!("-{name}"), usage.to_string())));

    writeln!(w)?;
    writeln!(w, "Options:")?;
    write_rows(&rows, w)
}

fn write_rows(rows: &[(String, String)], w: &mut dyn Write) -> io::Result<()> {
    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, desc) in rows {
        if desc.is_empty() {
            writeln!(w, "  {name}")?;
        } else {
            writeln!(w, "  {name:<width$}  {desc}")?;
        }
    }
    Ok(())
}

pub(crate) fn print_app_usage(app: &App, prog: &str) -> Result<(), DispatchError> {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    write_app_usage(app, prog, &mut w).map_err(|err| DispatchError::Handler(err.into()))
}

pub(crate) fn print_group_usage(group: &Group, prog: &str) -> Result<(), DispatchError> {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    write_group_usage(group, prog, &mut w).map_err(|err| DispatchError::Handler(err.into()))
}

pub(crate) fn print_cmd_usage(cmd: &Cmd, prog: &str) -> Result<(), DispatchError> {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    write_cmd_usage(cmd, prog, &mut w).map_err(|err| DispatchError::Handler(err.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::Group;

    fn render_app(app: &App) -> String {
        let mut buf = Vec::new();
        write_app_usage(app, "compo", &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_app_usage_sections() {
        let mut app = App::new().description("Manage project containers");
        app.flags_mut().string("p", "", "project name");
        app.add_group(Group::new("container").description("Manage containers"))
            .unwrap();
        app.add_command(Cmd::new("version", |_, _, _| Ok(())).description("Print the version"))
            .unwrap();

        let out = render_app(&app);
        assert!(out.contains("Usage: compo [OPTIONS] COMMAND"));
        assert!(out.contains("Manage project containers"));
        assert!(out.contains("Options:"));
        assert!(out.contains("-p  project name"));
        assert!(out.contains("Management Commands:"));
        assert!(out.contains("container  Manage containers"));
        assert!(out.contains("Commands:"));
        assert!(out.contains("version  Print the version"));
        assert!(out.contains("Run 'compo COMMAND --help' for more information on a command."));
    }

    #[test]
    fn test_app_usage_without_flags_omits_options() {
        let app = App::new();
        let out = render_app(&app);
        assert!(out.contains("Usage: compo COMMAND"));
        assert!(!out.contains("[OPTIONS]"));
        assert!(!out.contains("Options:"));
    }

    #[test]
    fn test_listings_are_sorted() {
        let mut app = App::new();
        app.add_command(Cmd::new("zz", |_, _, _| Ok(()))).unwrap();
        app.add_command(Cmd::new("aa", |_, _, _| Ok(()))).unwrap();
        app.add_command(Cmd::new("mm", |_, _, _| Ok(()))).unwrap();

        let out = render_app(&app);
        let aa = out.find("  aa").unwrap();
        let mm = out.find("  mm").unwrap();
        let zz = out.find("  zz").unwrap();
        assert!(aa < mm && mm < zz);
    }

    #[test]
    fn test_group_usage() {
        let mut group = Group::new("container").description("Manage containers");
        group.flags_mut().bool("clean", false, "remove stale state first");
        group
            .add_command(Cmd::new("recreate", |_, _, _| Ok(())).description("Recreate containers"))
            .unwrap();

        let mut buf = Vec::new();
        write_group_usage(&group, "compo", &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("Usage: compo container [OPTIONS] COMMAND"));
        assert!(out.contains("-clean  remove stale state first"));
        assert!(out.contains("recreate  Recreate containers"));
        assert!(out.contains("Run 'compo container COMMAND --help'"));
    }

    #[test]
    fn test_cmd_usage_shows_group_prefix() {
        let mut group = Group::new("container");
        group
            .add_command(Cmd::new("recreate", |_, _, _| Ok(())))
            .unwrap();
        let cmd = group.command("recreate").unwrap();

        let mut buf = Vec::new();
        write_cmd_usage(cmd, "compo", &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Usage: compo container recreate [PARAMS...]"));
    }

    #[test]
    fn test_root_cmd_usage_has_no_group_prefix() {
        let mut cmd = Cmd::new("version", |_, _, _| Ok(()));
        cmd.flags_mut().bool("short", false, "print only the number");

        let mut buf = Vec::new();
        write_cmd_usage(&cmd, "compo", &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Usage: compo version [OPTIONS] [PARAMS...]"));
        assert!(out.contains("-short  print only the number"));
    }

    #[test]
    fn test_column_alignment() {
        let mut app = App::new();
        app.flags_mut().bool("f", false, "short name");
        app.flags_mut().bool("project", false, "long name");

        let out = render_app(&app);
        // Both descriptions start at the same column.
        assert!(out.contains("-f        short name"));
        assert!(out.contains("-project  long name"));
    }
}
