use std::cell::RefCell;
use std::rc::Rc;

use arbor::{App, Cmd, Group};
use proptest::prelude::*;

const RESERVED: &[&str] = &["container", "recreate", "version"];

fn build_app(seen: Rc<RefCell<Option<Vec<String>>>>) -> App {
    let mut app = App::new().default(move |flags| {
        *seen.borrow_mut() = Some(flags.args().to_vec());
        Ok(())
    });

    let mut container = Group::new("container");
    container
        .add_command(Cmd::new("recreate", |_, _, _| Ok(())))
        .unwrap();
    app.add_group(container).unwrap();
    app.add_command(Cmd::new("version", |_, _, _| Ok(()))).unwrap();
    app
}

proptest! {
    // Any token list with no bare token matching a registered name resolves
    // to the app default, and the full range (minus the program name) lands
    // on the application scope.
    #[test]
    fn prop_unmatched_tokens_fall_back_to_app_default(
        tokens in prop::collection::vec("[a-z]{1,8}", 0..6)
            .prop_filter("tokens must not collide with registered names", |v| {
                v.iter().all(|t| !RESERVED.contains(&t.as_str()))
            })
    ) {
        let seen = Rc::new(RefCell::new(None));
        let app_seen = seen.clone();

        let mut argv = vec!["prog".to_string()];
        argv.extend(tokens.iter().cloned());

        let mut app = build_app(app_seen);
        app.dispatch(&argv).unwrap();

        // Bare tokens are never flags, so the app scope keeps them all as
        // positional arguments.
        prop_assert_eq!(seen.borrow().clone(), Some(tokens));
    }

    // A registered root command is always resolved no matter what bare
    // arguments follow it.
    #[test]
    fn prop_root_command_always_resolves(
        args in prop::collection::vec("[a-z]{1,8}", 0..4)
    ) {
        let called = Rc::new(RefCell::new(false));
        let called_clone = called.clone();

        let mut app = App::new();
        app.add_command(Cmd::new("version", move |_, _, _| {
            *called_clone.borrow_mut() = true;
            Ok(())
        })).unwrap();

        let mut argv = vec!["prog".to_string(), "version".to_string()];
        argv.extend(args);

        app.dispatch(&argv).unwrap();
        prop_assert!(*called.borrow());
    }
}
