//! Call command - dispatch any operation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;
use tgbot_client::{ParamValue, Params};
use tgbot_core::InputFile;
use tracing::debug;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the call command.
#[derive(Args)]
pub struct CallArgs {
    /// Operation name, e.g. getChat.
    pub operation: String,

    /// Parameters as key=value. Values that parse as JSON are sent as such.
    #[arg(value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// File parameter: name=@path uploads a file, name=value passes a file id or URL.
    #[arg(long, value_parser = parse_file_arg)]
    pub file: Option<FileArg>,
}

/// A file parameter given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArg {
    /// Parameter name.
    pub name: String,
    /// Where the file comes from.
    pub source: FileSource,
}

/// Source of a file parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Local file to upload.
    Path(PathBuf),
    /// File id or URL the server already knows.
    Reference(String),
}

// ============================================================================
// Argument Parsing
// ============================================================================

fn split_pair(s: &str) -> Result<(&str, &str), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    split_pair(s).map(|(k, v)| (k.to_string(), v.to_string()))
}

fn parse_file_arg(s: &str) -> Result<FileArg, String> {
    let (name, value) = split_pair(s)?;
    let source = match value.strip_prefix('@') {
        Some(path) if !path.is_empty() => FileSource::Path(PathBuf::from(path)),
        Some(_) => return Err("missing path after '@'".to_string()),
        None if value.is_empty() => return Err(format!("empty value for '{name}'")),
        None => FileSource::Reference(value.to_string()),
    };
    Ok(FileArg {
        name: name.to_string(),
        source,
    })
}

/// Interprets a command-line value: JSON when it parses, a string otherwise.
///
/// Numbers are sent exactly as typed. A JSON `null` means the parameter is
/// left out.
fn param_value(raw: &str) -> Option<ParamValue> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Number(_)) => Some(ParamValue::Str(raw.to_string())),
        Ok(value) => ParamValue::from_json(value),
        Err(_) => Some(ParamValue::Str(raw.to_string())),
    }
}

fn build_params(pairs: &[(String, String)]) -> Params {
    pairs
        .iter()
        .filter_map(|(key, raw)| param_value(raw).map(|value| (key.clone(), value)))
        .collect()
}

async fn read_upload(path: &Path) -> Result<InputFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let Some(filename) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        bail!("{} has no file name", path.display());
    };
    Ok(InputFile::new(filename, bytes)?)
}

// ============================================================================
// Command
// ============================================================================

/// Runs the call command.
pub async fn run(args: &CallArgs, cli: &Cli) -> Result<()> {
    let mut params = build_params(&args.params);

    let file_param = match &args.file {
        Some(file) => {
            let value = match &file.source {
                FileSource::Path(path) => ParamValue::File(read_upload(path).await?),
                FileSource::Reference(id) => ParamValue::Str(id.clone()),
            };
            params.insert(file.name.as_str(), value);
            Some(file.name.as_str())
        }
        None => None,
    };

    debug!(operation = %args.operation, params = params.len(), "Calling operation");
    let (bot, _) = super::connect(cli).await?;
    let envelope = bot.call(&args.operation, params, file_param).await?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_envelope(&envelope));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(envelope.body())?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_param_value_json_or_string() {
        assert_eq!(param_value("42"), Some(ParamValue::Str("42".into())));
        assert_eq!(param_value("true"), Some(ParamValue::Bool(true)));
        assert_eq!(param_value("hello"), Some(ParamValue::Str("hello".into())));
        assert_eq!(param_value("@news"), Some(ParamValue::Str("@news".into())));
        assert_eq!(
            param_value(r#"{"force_reply":true}"#),
            Some(ParamValue::Json(json!({"force_reply": true})))
        );
        assert_eq!(param_value("null"), None);
    }

    #[test]
    fn test_numbers_are_sent_as_typed() {
        let pairs = vec![
            ("text".to_string(), "1.0".to_string()),
            ("price".to_string(), "1.50".to_string()),
            ("big".to_string(), "1e3".to_string()),
            ("id".to_string(), "12345678901234567890".to_string()),
        ];
        let form = build_params(&pairs).encode_form().unwrap();
        let values: Vec<&str> = form.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(values, vec!["1.0", "1.50", "1e3", "12345678901234567890"]);
    }

    #[test]
    fn test_build_params_keeps_order() {
        let pairs = vec![
            ("chat_id".to_string(), "42".to_string()),
            ("text".to_string(), "a=b".to_string()),
            ("skip".to_string(), "null".to_string()),
        ];
        let params = build_params(&pairs);
        assert_eq!(
            params.encode_form().unwrap(),
            vec![
                ("chat_id".to_string(), "42".to_string()),
                ("text".to_string(), "a=b".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("text=x=y").unwrap(),
            ("text".to_string(), "x=y".to_string())
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=value").is_err());
    }

    #[test]
    fn test_parse_file_arg() {
        assert_eq!(
            parse_file_arg("photo=@cat.jpg").unwrap(),
            FileArg {
                name: "photo".into(),
                source: FileSource::Path("cat.jpg".into()),
            }
        );
        assert_eq!(
            parse_file_arg("document=BQADBAAD").unwrap().source,
            FileSource::Reference("BQADBAAD".into())
        );
        assert!(parse_file_arg("photo=@").is_err());
        assert!(parse_file_arg("photo=").is_err());
    }

    #[tokio::test]
    async fn test_read_upload_uses_file_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, b"hello").unwrap();

        let file = read_upload(&path).await.unwrap();
        assert_eq!(file.filename(), "note.txt");
        assert_eq!(file.bytes(), b"hello");
    }
}
