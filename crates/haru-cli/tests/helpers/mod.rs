use assert_cmd::Command;
use tempfile::TempDir;

/// Runs the `haru` binary in a scratch working directory with ambient
/// credentials stripped, so configuration comes only from what each test
/// provides.
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp directory"),
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("haru").expect("Failed to find haru binary");
        cmd.current_dir(self.temp_dir.path())
            .env_remove("GOOGLE_API_KEY")
            .env_remove("HARU_API_KEY")
            .env_remove("HARU_MODEL");
        cmd
    }

    /// Drop a config file into the scratch directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.temp_dir.path().join("haru.toml"), contents)
            .expect("Failed to write haru.toml");
    }
}
