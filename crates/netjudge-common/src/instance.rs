//! Instance directory layout, line-set comparison and instance persistence.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::constants::{EXPECTED_FILENAME, NETWORK_FILENAME, RESULT_FILENAME, START_FILENAME};
use crate::error::{HarnessError, HarnessResult};
use crate::network::Network;
use crate::process::Invocation;

/// File names inside one instance directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLayout {
    /// Instance directory, also the working directory of the program under test
    pub dir: PathBuf,
    pub network_file: String,
    pub start_file: String,
    pub result_file: String,
    pub expected_file: String,
}

impl InstanceLayout {
    /// Layout with the default file names
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            network_file: NETWORK_FILENAME.to_string(),
            start_file: START_FILENAME.to_string(),
            result_file: RESULT_FILENAME.to_string(),
            expected_file: EXPECTED_FILENAME.to_string(),
        }
    }

    pub fn with_network_file(mut self, name: impl Into<String>) -> Self {
        self.network_file = name.into();
        self
    }

    pub fn with_start_file(mut self, name: impl Into<String>) -> Self {
        self.start_file = name.into();
        self
    }

    pub fn with_result_file(mut self, name: impl Into<String>) -> Self {
        self.result_file = name.into();
        self
    }

    pub fn network_path(&self) -> PathBuf {
        self.dir.join(&self.network_file)
    }

    pub fn start_path(&self) -> PathBuf {
        self.dir.join(&self.start_file)
    }

    pub fn result_path(&self) -> PathBuf {
        self.dir.join(&self.result_file)
    }

    pub fn expected_path(&self) -> PathBuf {
        self.dir.join(&self.expected_file)
    }

    /// Invocation of `program` against this instance.
    ///
    /// The three positional arguments are relative file names; the program
    /// runs with the instance directory as its working directory.
    pub fn invocation(&self, program: impl Into<PathBuf>) -> Invocation {
        Invocation {
            program: program.into(),
            args: vec![
                self.network_file.clone(),
                self.start_file.clone(),
                self.result_file.clone(),
            ],
            working_dir: self.dir.clone(),
        }
    }

    /// Write a fresh instance into `self.dir`.
    ///
    /// Fails with [`HarnessError::AlreadyExists`] without touching anything
    /// if the directory is already present.
    pub async fn create(
        &self,
        network: &Network,
        start_vertex: &str,
        expected_lines: &[&str],
    ) -> HarnessResult<()> {
        match fs::create_dir(&self.dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(HarnessError::AlreadyExists(self.dir.clone()));
            }
            Err(e) => return Err(e.into()),
        }

        fs::write(self.network_path(), network.to_json()?).await?;
        fs::write(self.start_path(), format!("{}\n", start_vertex)).await?;

        let mut expected = String::new();
        for line in expected_lines {
            expected.push_str(line);
            expected.push('\n');
        }
        fs::write(self.expected_path(), expected).await?;

        tracing::debug!("Wrote instance files into {}", self.dir.display());
        Ok(())
    }
}

/// Set of the lines in `text`, each trimmed of surrounding whitespace
pub fn line_set(text: &str) -> BTreeSet<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}

/// Read a file as a line set
pub async fn read_line_set(path: &Path) -> HarnessResult<BTreeSet<String>> {
    let text = fs::read_to_string(path).await?;
    Ok(line_set(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Controller, Edge};

    #[test]
    fn test_order_is_ignored() {
        assert_eq!(line_set("b\na\n"), line_set("a\nb\n"));
    }

    #[test]
    fn test_duplicates_are_ignored() {
        assert_eq!(line_set("a\na\n"), line_set("a\n"));
    }

    #[test]
    fn test_content_differs() {
        assert_ne!(line_set("a\nc\n"), line_set("a\nb\n"));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(line_set("  v_0\r\nv_1   \n"), line_set("v_1\nv_0"));
    }

    #[test]
    fn test_invocation_uses_relative_names() {
        let layout = InstanceLayout::new("cases/small").with_result_file("out.txt");
        let invocation = layout.invocation("./solver");

        assert_eq!(invocation.args, vec!["network.json", "start.txt", "out.txt"]);
        assert_eq!(invocation.working_dir, PathBuf::from("cases/small"));
        assert_eq!(layout.result_path(), PathBuf::from("cases/small/out.txt"));
    }

    #[tokio::test]
    async fn test_create_writes_three_files() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = InstanceLayout::new(tmp.path().join("inst_50_2"));
        let network = Network {
            rows: vec![Edge::between(0, 1)],
            controllers: vec![Controller::at(1)],
        };

        layout.create(&network, "v_0", &["random instance"]).await.unwrap();

        let written = fs::read_to_string(layout.network_path()).await.unwrap();
        assert_eq!(Network::from_json(&written).unwrap(), network);
        assert_eq!(fs::read_to_string(layout.start_path()).await.unwrap(), "v_0\n");
        assert_eq!(
            read_line_set(&layout.expected_path()).await.unwrap(),
            BTreeSet::from(["random instance".to_string()])
        );
    }

    #[tokio::test]
    async fn test_create_refuses_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("taken");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("start.txt"), "v_9\n").unwrap();

        let layout = InstanceLayout::new(&dir);
        let err = layout
            .create(&Network::default(), "v_0", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, HarnessError::AlreadyExists(_)));
        assert_eq!(std::fs::read_to_string(dir.join("start.txt")).unwrap(), "v_9\n");
        assert!(!dir.join("network.json").exists());
    }
}
