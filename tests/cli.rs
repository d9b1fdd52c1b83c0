use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
    time::{SystemTime, UNIX_EPOCH},
};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now().duration_since(UNIX_EPOCH)
                                  .map_or(0, |d| d.as_nanos());
        let path =
            std::env::temp_dir().join(format!("foldcalc_cli_{tag}_{}_{ts}", std::process::id()));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_foldcalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_foldcalc")).args(args)
                                                .env_remove("RUST_LOG")
                                                .output()
                                                .expect("run foldcalc")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn eval_prints_accumulator_after_each_line() {
    let output = run_foldcalc(&["-e", "5", "-e", "(+) 1 2", "-e", "SQRT"]);

    assert!(output.status.success(), "process failed: {output:?}");
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "5");
    assert_eq!(lines[1], "8");
    assert!(lines[2].starts_with("2.828"), "unexpected output: {stdout}");
}

#[test]
fn leading_hyphen_instructions_are_accepted() {
    let output = run_foldcalc(&["--initial", "-3", "-e", "-2", "-q"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout_of(&output), "-5\n");
}

#[test]
fn plain_diagnostics_go_to_stderr() {
    let output = run_foldcalc(&["-i", "7", "-e", "+"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout_of(&output), "7\n");
    assert!(stderr_of(&output).contains("No argument for a binary operation"),
            "missing diagnostic: {}",
            stderr_of(&output));
}

#[test]
fn log_diagnostics_use_tracing() {
    let output = run_foldcalc(&["-d", "log", "-e", "SQX"]);

    assert!(output.status.success(), "process failed: {output:?}");
    let stderr = stderr_of(&output);
    assert!(stderr.contains("WARN"), "expected a warning event, got: {stderr}");
    assert!(stderr.contains("Unknown operation SQX"), "missing diagnostic: {stderr}");
}

#[test]
fn silenced_diagnostics() {
    let output = run_foldcalc(&["-d", "off", "-e", "/0"]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout_of(&output), "0\n");
    assert!(stderr_of(&output).is_empty(), "unexpected stderr: {}", stderr_of(&output));
}

#[test]
fn file_input_threads_accumulator() {
    let dir = TestDir::new("file");
    let script = dir.path.join("steps.calc");
    fs::write(&script, "2\r\n(*) 3 4\r\n_\n").expect("write script");

    let output = run_foldcalc(&["-f", script.to_str().expect("utf-8 path")]);

    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout_of(&output), "2\n24\n-24\n");
}

#[test]
fn missing_file_fails() {
    let dir = TestDir::new("missing");
    let script = dir.path.join("absent.calc");

    let output = run_foldcalc(&["--file", script.to_str().expect("utf-8 path")]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Failed to read the input file"));
}

#[test]
fn stdin_input() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_foldcalc")).args(["-q"])
                                                                .stdin(Stdio::piped())
                                                                .stdout(Stdio::piped())
                                                                .stderr(Stdio::piped())
                                                                .spawn()
                                                                .expect("spawn foldcalc");

    child.stdin
         .take()
         .expect("stdin handle")
         .write_all(b"10\n(/) 2 0\n(/) 2 5\n")
         .expect("write stdin");

    let output = child.wait_with_output().expect("wait for foldcalc");
    assert!(output.status.success(), "process failed: {output:?}");
    assert_eq!(stdout_of(&output), "1\n");
    assert!(stderr_of(&output).contains("Bad right argument for division: 0"));
}
