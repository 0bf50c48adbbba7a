//! End-to-end behaviour of `ShellSession::command` on a fresh session.

use proptest::prelude::*;
use webshell_terminal::ShellSession;
use webshell_types::config::ShellConfig;

#[test]
fn pwd_in_fresh_session() {
    let mut shell = ShellSession::new();
    assert_eq!(shell.command("pwd"), "/home/nick\n");
}

#[test]
fn ls_in_fresh_session() {
    let mut shell = ShellSession::new();
    assert_eq!(shell.command("ls"), "about.txt\n");
}

#[test]
fn cat_about() {
    let mut shell = ShellSession::new();
    assert_eq!(
        shell.command("cat about.txt"),
        "This shell was created with a bit of JavaScript\n"
    );
}

#[test]
fn cd_tmp_then_pwd() {
    let mut shell = ShellSession::new();
    assert_eq!(shell.command("cd /tmp"), "");
    assert_eq!(shell.command("pwd"), "/tmp\n");
}

#[test]
fn cat_missing_file() {
    let mut shell = ShellSession::new();
    assert_eq!(shell.command("cat nope.txt"), "No such file or directory\n");
}

#[test]
fn unknown_command() {
    let mut shell = ShellSession::new();
    assert_eq!(shell.command("frobnicate"), "Command not found\n");
}

#[test]
fn help_text() {
    let mut shell = ShellSession::new();
    assert_eq!(
        shell.command("help"),
        "cat    - Output the contents of a file\n\
         cd     - Change directory\n\
         date   - Shows the current date\n\
         echo   - Outputs whatever is given to it\n\
         help   - Display this help dialog\n\
         ls     - List a directory\n\
         pwd    - Display current directory\n\
         whoami - Shows your username\n"
    );
}

#[test]
fn ls_bin_lists_every_builtin() {
    let mut shell = ShellSession::new();
    assert_eq!(
        shell.command("ls /bin"),
        "cat\ncd\ndate\necho\nhelp\nls\npwd\nwhoami\n"
    );
}

#[test]
fn ls_file_echoes_argument() {
    let mut shell = ShellSession::new();
    assert_eq!(shell.command("ls ~/about.txt"), "~/about.txt\n");
}

#[test]
fn ls_empty_directory_prints_nothing() {
    let mut shell = ShellSession::new();
    assert_eq!(shell.command("ls /tmp"), "");
}

#[test]
fn date_is_one_line() {
    let mut shell = ShellSession::new();
    let out = shell.command("date");
    assert!(out.ends_with('\n'));
    assert_eq!(out.matches('\n').count(), 1);
    assert!(out.len() > 1);
}

#[test]
fn whoami_and_home_follow_config() {
    let config = ShellConfig::from_toml_str("user = \"ada\"\nabout = \"hi\"").unwrap();
    let mut shell = ShellSession::with_config(config).unwrap();
    assert_eq!(shell.command("whoami"), "ada\n");
    assert_eq!(shell.command("pwd"), "/home/ada\n");
    assert_eq!(shell.command("cat ~/about.txt"), "hi\n");
}

#[test]
fn history_after_session() {
    let mut shell = ShellSession::new();
    for line in ["pwd", "", "nope", "cd /tmp"] {
        shell.command(line);
    }
    let history: Vec<&str> = shell.history().iter().map(String::as_str).collect();
    assert_eq!(history, ["cd /tmp", "nope", "", "pwd"]);
}

proptest! {
    #[test]
    fn cd_then_pwd_round_trips(
        dir in prop::sample::select(vec!["/", "/bin", "/home", "/home/nick", "/tmp", "~", "..", "../..", ".", "../../tmp/", "~/../nick"]),
    ) {
        let mut shell = ShellSession::new();
        let resolved = shell.resolve(dir);
        prop_assert_eq!(shell.command(&format!("cd {dir}")), "");
        prop_assert_eq!(shell.command("pwd"), format!("/{}\n", resolved.join("/")));
    }

    #[test]
    fn echo_output_ends_with_exactly_one_newline(words in prop::collection::vec("[a-z0-9.]{1,8}", 1..6)) {
        let mut shell = ShellSession::new();
        let out = shell.command(&format!("echo {}", words.join(" ")));
        prop_assert!(out.ends_with('\n'));
        prop_assert!(!out.ends_with("\n\n"));
        prop_assert_eq!(out, format!("{}\n", words.join(" ")));
    }

    #[test]
    fn cat_concatenates(about in "[a-zA-Z ]{0,20}\n") {
        let config = ShellConfig { about: about.clone(), ..ShellConfig::default() };
        let mut shell = ShellSession::with_config(config).unwrap();
        let single = shell.command("cat about.txt");
        let double = shell.command("cat about.txt /home/nick/about.txt");
        prop_assert_eq!(&single, &about);
        prop_assert_eq!(double, format!("{single}{single}"));
    }

    #[test]
    fn dotdots_never_escape_root(n in 1usize..12) {
        let mut shell = ShellSession::new();
        let ups = vec![".."; n].join("/");
        prop_assert_eq!(shell.command(&format!("cd /{ups}")), "");
        prop_assert_eq!(shell.command("pwd"), "/\n");
    }

    #[test]
    fn never_panics_on_arbitrary_input(line in "[ -~]{0,40}") {
        let mut shell = ShellSession::new();
        let out = shell.command(&line);
        prop_assert!(out.is_empty() || out.ends_with('\n'));
        prop_assert_eq!(&shell.history()[0], &line);
    }
}
