use assert_cmd::Command;
use std::path::Path;

pub fn registry_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("course-registry").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd
}
