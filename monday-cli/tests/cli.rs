use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Title, PLAY GAME, four story pauses, SMASH STEREO, game over, QUIT.
const SMASH_AND_QUIT: &str = "\n1\n\n\n\n\n3\n\n7\n";

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "monday-cli-{label}-{}.dat",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn run(args: &[&str], stdin: &str) -> Output {
    let exe = env!("CARGO_BIN_EXE_monday");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("run cli")
}

#[test]
fn cli_quits_from_the_main_menu() {
    let save = temp_path("quit");
    let output = run(
        &["--pace", "0", "--save-file", save.to_str().unwrap()],
        "\n7\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-----MONDAY-----"));
    assert!(stdout.contains("EVEN START YET"));
    assert!(stdout.contains("Thanks for playing!"));
    assert!(save.exists());
    let _ = std::fs::remove_file(save);
}

#[test]
fn cli_cooperative_host_plays_too() {
    let save = temp_path("coop");
    let output = run(
        &[
            "--io",
            "cooperative",
            "--pace",
            "0",
            "--save-file",
            save.to_str().unwrap(),
        ],
        SMASH_AND_QUIT,
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("YOU GRAB YOUR BASEBALL BAT"));
    assert!(stdout.contains("---GAME--OVER---"));
    assert!(stdout.contains("THANKS FOR PLAYING MONDAY!"));
    let _ = std::fs::remove_file(save);
}

#[test]
fn cli_closed_input_exits_cleanly() {
    let save = temp_path("eof");
    let output = run(&["--pace", "0", "--save-file", save.to_str().unwrap()], "\n1\n");
    assert!(output.status.success());
    let _ = std::fs::remove_file(save);
}

#[test]
fn cli_show_and_clear_stats() {
    let save = temp_path("stats");
    let save_arg = save.to_str().unwrap();

    run(&["--pace", "0", "--save-file", save_arg], SMASH_AND_QUIT);

    let output = run(&["--pace", "0", "--save-file", save_arg, "--show-stats"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("YOU HAVE PLAYED THIS GAME ONCE."));
    assert!(stdout.contains("- SMASHED STEREO CONTAINING MOB BOSS'S CD ONCE"));

    let output = run(&["--save-file", save_arg, "--clear-stats"], "");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Save cleared."));
    assert!(save.exists(), "clearing writes fresh defaults");

    let output = run(&["--pace", "0", "--save-file", save_arg, "--show-stats"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("YOU HAVE PLAYED THIS GAME 0 TIMES."));
}

#[test]
fn cli_rejects_bad_config() {
    let output = run(&["--pace=-2", "--show-stats"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("pace"));
}
