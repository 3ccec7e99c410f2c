use assert_cmd::Command;
use tempfile::TempDir;

pub fn holter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("holter").unwrap();
    cmd.env_remove("HOLTER_ROOT");
    cmd.env_remove("HOLTER_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Temp directory with an initialized diary
#[allow(dead_code)]
pub fn init_diary() -> TempDir {
    let temp = TempDir::new().unwrap();
    holter_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Run holter inside `dir` with the given arguments and expect success
#[allow(dead_code)]
pub fn holter_in(dir: &std::path::Path, args: &[&str]) {
    holter_cmd().current_dir(dir).args(args).assert().success();
}
