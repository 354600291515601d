use anyhow::Result;
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

const ARTICLE: &str = "Solar panels convert sunlight into electricity. Modern solar panels \
    use silicon cells, and solar energy adoption keeps growing worldwide. Battery storage \
    lets households keep solar energy for the night, while grid operators balance supply \
    and demand. Cheaper battery storage and better silicon cells make renewable energy \
    competitive with fossil fuels.";

fn run_with_stdin(input: &[u8]) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_keyword-extractor"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    {
        let mut stdin = child.stdin.take().expect("stdin is piped");
        stdin.write_all(input)?;
    }

    Ok(child.wait_with_output()?)
}

/// 確認輸出為單行 JSON 並且只有一個頂層鍵
fn parse_single_line(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8");
    assert!(stdout.ends_with('\n'), "missing trailing newline: {:?}", stdout);
    assert_eq!(stdout.trim_end().lines().count(), 1, "not a single line: {:?}", stdout);

    let value: Value = serde_json::from_str(stdout.trim_end()).expect("stdout is JSON");
    assert_eq!(value.as_object().expect("top level object").len(), 1);
    value
}

fn assert_quiet_success(output: &Output) {
    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_empty_stdin_reports_error() -> Result<()> {
    let output = run_with_stdin(b"")?;
    assert_quiet_success(&output);

    let value = parse_single_line(&output);
    assert_eq!(value, serde_json::json!({"error": "No input text provided"}));
    Ok(())
}

#[test]
fn test_whitespace_stdin_reports_error() -> Result<()> {
    let output = run_with_stdin(b"   \n\t\r\n  ")?;
    assert_quiet_success(&output);

    let value = parse_single_line(&output);
    assert_eq!(value["error"], "No input text provided");
    Ok(())
}

#[test]
fn test_article_yields_ranked_keywords() -> Result<()> {
    let output = run_with_stdin(ARTICLE.as_bytes())?;
    assert_quiet_success(&output);

    let value = parse_single_line(&output);
    let keywords = value["keywords"].as_array().expect("keywords array");
    assert!(!keywords.is_empty());
    assert!(keywords.len() <= 10);
    for keyword in keywords {
        let keyword = keyword.as_str().expect("keyword is a string");
        assert!(!keyword.trim().is_empty());
        assert!(keyword.split_whitespace().count() <= 2, "too long: {}", keyword);
    }
    Ok(())
}

#[test]
fn test_text_without_candidates_yields_empty_keywords() -> Result<()> {
    for input in ["the and of to", "!!!"] {
        let output = run_with_stdin(input.as_bytes())?;
        assert_quiet_success(&output);

        let value = parse_single_line(&output);
        assert_eq!(value, serde_json::json!({"keywords": []}), "input: {:?}", input);
    }
    Ok(())
}

#[test]
fn test_article_keeps_original_casing() -> Result<()> {
    let output = run_with_stdin(ARTICLE.as_bytes())?;
    assert_quiet_success(&output);

    let value = parse_single_line(&output);
    let article_words: Vec<&str> = ARTICLE
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .collect();
    let keywords = value["keywords"].as_array().expect("keywords array");
    assert!(!keywords.is_empty());
    for keyword in keywords {
        let keyword = keyword.as_str().expect("keyword is a string");
        for word in keyword.split_whitespace() {
            assert!(
                article_words.contains(&word),
                "{:?} in {:?} is not written as in the article",
                word,
                keyword
            );
        }
    }
    Ok(())
}

#[test]
fn test_invalid_utf8_reports_error() -> Result<()> {
    let output = run_with_stdin(&[0x48, 0x69, 0xff, 0xfe, 0x21])?;
    assert_quiet_success(&output);

    let value = parse_single_line(&output);
    let error = value["error"].as_str().expect("error string");
    assert!(error.starts_with("Input is not valid UTF-8"), "got: {}", error);
    Ok(())
}

#[test]
fn test_stdin_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    for _ in 0..50 {
        writeln!(file, "{}", ARTICLE)?;
    }
    file.flush()?;

    let output = Command::new(env!("CARGO_BIN_EXE_keyword-extractor"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::from(file.reopen()?))
        .output()?;
    assert_quiet_success(&output);

    let value = parse_single_line(&output);
    assert!(value["keywords"].as_array().expect("keywords array").len() <= 10);
    Ok(())
}

#[test]
fn test_extraction_flags_are_rejected() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_keyword-extractor"))
        .arg("--top=20")
        .stdin(Stdio::null())
        .output()?;
    assert!(!output.status.success());
    Ok(())
}
