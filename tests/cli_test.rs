// Runs the built binary and checks what it prints

use std::process::{Command, Stdio};

#[test]
fn test_binary_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_strwalk"))
        .output()
        .expect("Failed to run strwalk");

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert_eq!(output.status.code(), Some(0));

    // Piped stdout is never styled
    let stdout = String::from_utf8(output.stdout)
        .expect("stdout is not UTF-8");
    assert!(!stdout.contains('\x1b'));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 44);
    assert_eq!(
        lines[0],
        "Q: \tP: n/a\tLEN: 43\tS: The quick brown fox jumps over the lazy dog"
    );
    assert_eq!(
        lines[1],
        "OCTET: 84\t*P: T\t\tP: The quick brown fox jumps over the lazy dog"
    );
    assert_eq!(lines[43], "OCTET: 103\t*P: g\t\tP: g");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Walking 43 characters at 0x00400000"));
    assert!(stderr.contains("crc32 414fa339"));
}

#[test]
fn test_closed_stdout_still_exits_cleanly() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_strwalk"))
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn strwalk");

    // Close the read end before the walk writes anything
    drop(child.stdout.take());

    let status = child.wait().expect("Failed to wait for strwalk");
    assert!(status.success(), "exit status: {:?}", status);
}
