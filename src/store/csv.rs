//! CSV persistence for fetched articles

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::store::Article;

/// Write articles to a CSV file, creating parent directories as needed.
pub fn write_articles(path: &Path, articles: &[Article]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {:?}", path))?;

    for article in articles {
        writer.serialize(article)?;
    }
    writer.flush()?;

    Ok(())
}

/// Read articles from a CSV file written by `write_articles`.
pub fn read_articles(path: &Path) -> Result<Vec<Article>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path))?;

    let mut articles = Vec::new();
    for record in reader.deserialize() {
        let article: Article = record.context("Malformed CSV row")?;
        articles.push(article);
    }

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_read_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("titles.csv");

        let articles = vec![
            Article::new("101", "Bilingual language development", "1995-06-01"),
            Article::new("102", "Aphasia recovery in adults", "2004 Nov"),
        ];

        write_articles(&path, &articles).unwrap();
        let read = read_articles(&path).unwrap();

        assert_eq!(read, articles);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data/nested/titles.csv");

        write_articles(&path, &[Article::new("1", "T", "2020")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp = tempdir().unwrap();
        let result = read_articles(&temp.path().join("absent.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_titles_with_commas_and_quotes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("titles.csv");

        let articles = vec![Article::new(
            "103",
            r#"Speech, language, and "executive" function"#,
            "2011-01-01",
        )];

        write_articles(&path, &articles).unwrap();
        let read = read_articles(&path).unwrap();
        assert_eq!(read, articles);
    }
}
