use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn bin_path(env_key: &str, name: &str) -> PathBuf {
    std::env::var_os(env_key)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                format!("{name}.exe")
            } else {
                name.to_string()
            });
            p
        })
}

#[test]
fn cli_renders_and_reports_the_saved_path() {
    let dir = PathBuf::from("target").join("cli_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("art.png");
    let _ = std::fs::remove_file(&out_path);

    let exe = bin_path("CARGO_BIN_EXE_coppertrace", "coppertrace");
    let out_arg = out_path.to_string_lossy().to_string();
    let output = Command::new(exe)
        .args([
            out_arg.as_str(),
            "--style",
            "radial",
            "--seed",
            "7",
            "--network",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(out_path.exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Art saved to"));
}

#[test]
fn strip_frontmatter_cuts_at_the_last_marker() {
    let exe = bin_path("CARGO_BIN_EXE_strip-frontmatter", "strip-frontmatter");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"+++\ntitle = \"t\"\n+++\nbody\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "body\n\n");
}
