use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn parse_jsonl(stdout: &[u8]) -> Vec<Value> {
    let s = String::from_utf8_lossy(stdout);
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid jsonl line"))
        .collect()
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn write_titles_csv(dir: &Path) -> PathBuf {
    let path = dir.join("all_titles.csv");
    write_file(
        &path,
        "pmid,title,publication_date\n\
         100001,Bilingual language development in children,1994 Winter\n\
         100002,\"The bilingual brain: language processing after stroke\",1998 Nov\n\
         100003,Aphasia recovery in bilingual adults,2001 Jul-Aug\n\
         100004,\"Speech therapy outcomes, an update\",2003 May\n",
    );
    path
}

#[test]
fn tokens_emits_one_item_per_article() {
    let temp = tempdir().unwrap();
    let csv = write_titles_csv(temp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubcloud"));
    cmd.arg("tokens").arg(&csv);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 4);
    for item in &items {
        assert_eq!(item.get("kind").and_then(|k| k.as_str()), Some("tokens"));
        assert!(item.get("decade").and_then(|d| d.as_i64()).is_some());
    }
}

#[test]
fn tokens_removes_stopwords_and_keeps_content_words() {
    let temp = tempdir().unwrap();
    let csv = write_titles_csv(temp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubcloud"));
    cmd.arg("tokens").arg(&csv);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    let all_tokens: Vec<String> = items
        .iter()
        .filter_map(|i| i.pointer("/data/tokens"))
        .filter_map(|t| t.as_array())
        .flatten()
        .filter_map(|t| t.as_str().map(str::to_string))
        .collect();

    assert!(all_tokens.iter().any(|t| t == "bilingual"));
    assert!(all_tokens.iter().any(|t| t == "aphasia"));
    assert!(all_tokens.iter().any(|t| t == "brain"));
    assert!(!all_tokens.iter().any(|t| t == "the"));
    assert!(!all_tokens.iter().any(|t| t == "in"));
}

#[test]
fn tokens_honors_extra_stopwords() {
    let temp = tempdir().unwrap();
    let csv = write_titles_csv(temp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubcloud"));
    cmd.arg("tokens")
        .arg(&csv)
        .arg("--stopword")
        .arg("bilingual");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    let all_tokens: Vec<String> = items
        .iter()
        .filter_map(|i| i.pointer("/data/tokens"))
        .filter_map(|t| t.as_array())
        .flatten()
        .filter_map(|t| t.as_str().map(str::to_string))
        .collect();

    assert!(!all_tokens.iter().any(|t| t == "bilingual"));
    assert!(all_tokens.iter().any(|t| t == "aphasia"));
}

#[test]
fn stats_buckets_articles_by_decade() {
    let temp = tempdir().unwrap();
    let csv = write_titles_csv(temp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubcloud"));
    cmd.arg("stats").arg(&csv).arg("--top").arg("5");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 2);

    let decades: Vec<i64> = items
        .iter()
        .filter_map(|i| i.get("decade").and_then(|d| d.as_i64()))
        .collect();
    assert_eq!(decades, vec![1990, 2000]);

    for item in &items {
        assert_eq!(item.pointer("/data/articles").and_then(|a| a.as_u64()), Some(2));
        assert!(item.pointer("/data/top_words").and_then(|w| w.as_array()).is_some());
    }
}

#[test]
fn tokens_markdown_groups_by_section() {
    let temp = tempdir().unwrap();
    let csv = write_titles_csv(temp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubcloud"));
    cmd.arg("--format").arg("md").arg("tokens").arg(&csv);

    let assert = cmd.assert().success();
    let s = String::from_utf8_lossy(&assert.get_output().stdout);

    assert!(s.contains("## Tokens"));
    assert!(s.contains("**1990s**"));
    assert!(s.contains("**2000s**"));
}

#[test]
fn tokens_raw_prints_titles_only() {
    let temp = tempdir().unwrap();
    let csv = write_titles_csv(temp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubcloud"));
    cmd.arg("--format").arg("raw").arg("tokens").arg(&csv);

    let assert = cmd.assert().success();
    let s = String::from_utf8_lossy(&assert.get_output().stdout);

    assert!(s.contains("Aphasia recovery in bilingual adults"));
    assert!(!s.contains("{"));
}

#[test]
fn tokens_missing_input_fails() {
    let temp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubcloud"));
    cmd.arg("tokens").arg(temp.path().join("nope.csv"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nope.csv"));
}

#[test]
fn tokens_rejects_unknown_language() {
    let temp = tempdir().unwrap();
    let csv = write_titles_csv(temp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubcloud"));
    cmd.arg("tokens").arg(&csv).arg("--language").arg("klingon");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("klingon"));
}

#[test]
fn cloud_rejects_invalid_font() {
    let temp = tempdir().unwrap();
    let csv = write_titles_csv(temp.path());
    let font = temp.path().join("broken.ttf");
    write_file(&font, "this is not a font");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubcloud"));
    cmd.arg("cloud")
        .arg(&csv)
        .arg("--font")
        .arg(&font)
        .arg("--out-dir")
        .arg(temp.path().join("output"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("font"));
}

#[test]
fn cloud_requires_font_argument() {
    let temp = tempdir().unwrap();
    let csv = write_titles_csv(temp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pubcloud"));
    cmd.arg("cloud").arg(&csv);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--font"));
}
