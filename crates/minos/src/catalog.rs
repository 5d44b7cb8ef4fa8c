//! Test catalog parsing
//!
//! One entry per line: blank lines are spacing, `#` lines are section
//! headers, anything else names an instance directory by its first token.
//! Text after the first token is kept as an annotation and not interpreted.

use std::path::Path;

use netjudge_common::HarnessResult;
use netjudge_common::constants::COMMENT_MARKER;
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    Blank,
    Section(String),
    Test {
        instance: String,
        annotation: Option<String>,
    },
}

impl CatalogEntry {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return CatalogEntry::Blank;
        }
        if line.starts_with(COMMENT_MARKER) {
            return CatalogEntry::Section(line.to_string());
        }

        let (instance, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let rest = rest.trim();

        CatalogEntry::Test {
            instance: instance.to_string(),
            annotation: (!rest.is_empty()).then(|| rest.to_string()),
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, CatalogEntry::Test { .. })
    }
}

pub fn parse_catalog(text: &str) -> Vec<CatalogEntry> {
    text.lines().map(CatalogEntry::parse).collect()
}

pub async fn load_catalog(path: &Path) -> HarnessResult<Vec<CatalogEntry>> {
    let text = fs::read_to_string(path).await?;
    let entries = parse_catalog(&text);
    tracing::debug!(
        "Loaded {} catalog lines ({} tests) from {}",
        entries.len(),
        entries.iter().filter(|e| e.is_test()).count(),
        path.display()
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let text = "# small graphs\n\ntiny_50_3\nrand_20_10   slow on v2, see notes\n   \n\tpath_0_5\n";
        let entries = parse_catalog(text);

        assert_eq!(
            entries,
            vec![
                CatalogEntry::Section("# small graphs".into()),
                CatalogEntry::Blank,
                CatalogEntry::Test {
                    instance: "tiny_50_3".into(),
                    annotation: None
                },
                CatalogEntry::Test {
                    instance: "rand_20_10".into(),
                    annotation: Some("slow on v2, see notes".into())
                },
                CatalogEntry::Blank,
                CatalogEntry::Test {
                    instance: "path_0_5".into(),
                    annotation: None
                },
            ]
        );
    }

    #[test]
    fn test_marker_only_at_line_start() {
        assert_eq!(
            CatalogEntry::parse("dir_1 # not a header"),
            CatalogEntry::Test {
                instance: "dir_1".into(),
                annotation: Some("# not a header".into())
            }
        );
        assert_eq!(
            CatalogEntry::parse("  #indented header"),
            CatalogEntry::Section("#indented header".into())
        );
    }
}
