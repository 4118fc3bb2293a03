//! End-to-end tests driving the dispatcher the way a terminal surface
//! would: feed raw lines, adopt the new state only on success.

use std::sync::Arc;

use vsh::{execute, CommandRegistry, CommandResult, FileSystem, Interaction, ShellState};

struct Session {
    state: ShellState,
    registry: CommandRegistry,
    history: Vec<Interaction>,
}

impl Session {
    fn new() -> Self {
        Self {
            state: ShellState::new(Arc::new(FileSystem::builtin())),
            registry: CommandRegistry::with_builtins(),
            history: Vec::new(),
        }
    }

    /// Run one line, applying the state update only when it succeeded.
    fn run(&mut self, line: &str) -> String {
        let result = execute(line, &self.state, &self.registry);
        let output = match result {
            CommandResult::Success { state, output } => {
                self.state = state;
                output
            }
            CommandResult::Error { message } => message,
        };
        self.history.push(Interaction::new(line, output.clone()));
        output
    }

    fn cwd(&self) -> &str {
        &self.state.cwd
    }
}

#[test]
fn cd_absolute_from_root() {
    let mut session = Session::new();
    assert_eq!(session.run("cd /home"), "");
    assert_eq!(session.cwd(), "/home");
}

#[test]
fn cd_missing_leaves_cwd_unchanged() {
    let mut session = Session::new();
    assert_eq!(session.run("cd /nope"), "cd: /nope: No such directory");
    assert_eq!(session.cwd(), "/");
}

#[test]
fn cd_redirect_fails_like_missing_but_exists() {
    let mut session = Session::new();
    // /blog is a redirect leaf: it exists in the tree but is not
    // navigable, unlike /nope which does not exist at all.
    assert!(session.state.fs.locate("/blog").is_some());
    assert!(session.state.fs.locate("/nope").is_none());
    assert_eq!(session.run("cd blog"), "cd: blog: No such directory");
    assert_eq!(session.cwd(), "/");
}

#[test]
fn cd_parent_walks_up_and_clamps_at_root() {
    let mut session = Session::new();
    session.run("cd /home/projects");
    session.run("cd ..");
    assert_eq!(session.cwd(), "/home");
    session.run("cd ..");
    assert_eq!(session.cwd(), "/");
    // Further `..` at root succeeds silently.
    assert_eq!(session.run("cd .."), "");
    assert_eq!(session.cwd(), "/");
}

#[test]
fn cd_without_target_goes_home() {
    let mut session = Session::new();
    session.run("cd /home/projects");
    session.run("cd");
    assert_eq!(session.cwd(), "/home");
}

#[test]
fn ls_lists_children_in_declared_order() {
    let mut session = Session::new();
    session.run("cd /home/projects");
    assert_eq!(session.run("ls"), "README.md  test");
}

#[test]
fn ls_at_root() {
    let mut session = Session::new();
    assert_eq!(session.run("ls"), "home  blog  wiki");
}

#[test]
fn clear_succeeds_without_touching_state() {
    let mut session = Session::new();
    session.run("cd /home");
    assert_eq!(session.run("clear"), "");
    assert_eq!(session.cwd(), "/home");
}

#[test]
fn unknown_command_is_reported_not_invoked() {
    let mut session = Session::new();
    assert_eq!(session.run("bogus"), "bogus: command not found");
    assert_eq!(session.cwd(), "/");
}

#[test]
fn failed_commands_never_corrupt_a_session() {
    let mut session = Session::new();
    session.run("cd /home");
    session.run("cd nope");
    session.run("what");
    session.run("cd projects");
    assert_eq!(session.cwd(), "/home/projects");
    assert_eq!(session.run("ls"), "README.md  test");
}

#[test]
fn history_records_every_interaction() {
    let mut session = Session::new();
    session.run("cd /home");
    session.run("bogus");
    assert_eq!(session.history.len(), 2);
    assert_eq!(session.history[0], Interaction::new("cd /home", ""));
    assert_eq!(
        session.history[1],
        Interaction::new("bogus", "bogus: command not found")
    );
}

#[test]
fn sessions_share_one_filesystem_independently() {
    let fs = Arc::new(FileSystem::builtin());
    let registry = CommandRegistry::with_builtins();

    let first = ShellState::new(Arc::clone(&fs));
    let second = ShellState::new(Arc::clone(&fs));

    let moved = match execute("cd /home", &first, &registry) {
        CommandResult::Success { state, .. } => state,
        CommandResult::Error { message } => panic!("{message}"),
    };

    assert_eq!(moved.cwd, "/home");
    // Neither the sibling session nor the original value moved.
    assert_eq!(first.cwd, "/");
    assert_eq!(second.cwd, "/");
}
