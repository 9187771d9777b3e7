//! `compo` - a small container-management CLI built on arbor.
//!
//! Demonstrates the full surface: application flags, a group with its own
//! flags and commands, a root command, and default handlers. Try:
//!
//! ```text
//! compo -p myproject container -clean recreate -f nginx
//! compo container
//! compo version
//! compo -help
//! ```

use std::process::ExitCode;

use anyhow::bail;
use arbor::{App, Cmd, Group, RegistrationError};

fn main() -> ExitCode {
    let mut app = match build_app() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("setup: {err}");
            return ExitCode::FAILURE;
        }
    };
    app.run()
}

fn build_app() -> Result<App, RegistrationError> {
    let mut app = App::new().description("Manage project containers");
    app.flags_mut().string("p", "", "project name");
    app.flags_mut().bool("debug", false, "enable verbose diagnostics");

    let mut container = Group::new("container").description("Manage containers");
    container.flags_mut().bool("clean", false, "remove stale state first");

    let mut recreate = Cmd::new("recreate", |app, group, cmd| {
        if cmd.args().is_empty() {
            bail!("no container specified");
        }
        let project = app.get_str("p").unwrap_or("");
        let clean = group.and_then(|g| g.get_bool("clean")).unwrap_or(false);
        let force = cmd.get_bool("f").unwrap_or(false);
        for name in cmd.args() {
            println!("recreating {name} (project: {project:?}, clean: {clean}, force: {force})");
        }
        Ok(())
    })
    .description("Stop, remove and start containers");
    recreate.flags_mut().bool("f", false, "do not prompt before recreating");
    container.add_command(recreate)?;

    let mut logs = Cmd::new("logs", |_app, _group, cmd| {
        let lines = cmd.get_int("n").unwrap_or(10);
        for name in cmd.args() {
            println!("showing last {lines} lines for {name}");
        }
        Ok(())
    })
    .description("Show container logs");
    logs.flags_mut().int("n", 10, "number of lines to show");
    container.add_command(logs)?;

    app.add_group(container)?;

    app.add_command(
        Cmd::new("version", |app, _group, _cmd| {
            if app.get_bool("debug").unwrap_or(false) {
                println!("compo {} (debug)", env!("CARGO_PKG_VERSION"));
            } else {
                println!("compo {}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        })
        .description("Print the version"),
    )?;

    Ok(app)
}
