use std::process::Command;

fn p001(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_p001"))
        .args(args)
        .output()
        .expect("failed to run p001")
}

#[test]
fn prints_headline() {
    let out = p001(&[]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "The sum of all multiples of 3 or 5 below 1000 is 233168\n"
    );
}

#[test]
fn check_passes() {
    let out = p001(&["--check"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("p001: correct"));
}

#[test]
fn json_report() {
    let out = p001(&["--json"]);
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["answer"], "233168");
    assert_eq!(report["correct"], true);
}

#[test]
fn stray_argument_fails() {
    let out = p001(&["1000"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn time_goes_to_stderr() {
    let out = p001(&["--time"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "The sum of all multiples of 3 or 5 below 1000 is 233168\n"
    );
    assert!(String::from_utf8_lossy(&out.stderr).contains("p001: solved in"));
}

#[test]
fn piped_stderr_is_uncoloured() {
    let out = p001(&["--time", "--check"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("p001: correct"));
    assert!(!stderr.contains("\x1b["));

    let out = p001(&["--bogus"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&out.stderr).contains("\x1b["));
}

#[cfg(unix)]
#[test]
fn non_unicode_argument_fails_cleanly() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let out = Command::new(env!("CARGO_BIN_EXE_p001"))
        .arg(OsStr::from_bytes(b"\xff"))
        .output()
        .expect("failed to run p001");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid arguments"));
}
