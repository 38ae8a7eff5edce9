//! Key-information extraction from conversation transcripts

use super::file_reader::FileReader;
use crate::core::{Gateway, GenerationRequest, Mode, ResponseFormat};
use crate::utils::error::ServiceError;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const SYSTEM_PROMPT: &str = r#"
【役割】多人対話内容分析の専門家

【タスク】多人対話の文字起こしテキストから重要な情報を抽出する

【入力】多人対話の完全な文字起こしテキスト

【核心原則】
✅ 重要情報の識別：対話中の重要な事実、決定、情報ポイントを抽出
✅ 構造化整理：情報を明確で整理された要点にまとめる
✅ 原意に忠実：元の対話の情報意図を正確に保持する

【出力規範】
1. 抽出された情報はMarkdown形式の項目として列挙
2. 各情報は簡潔かつ完全な内容で
3. 口癖、重複内容、無関係な社交辞令を除去
4. 対話での情報の出現順に配列

【例】
対話の一部：
"佐藤：皆さん、こんにちは。新製品の発表について、来週の火曜日に行うことにしました。
鈴木：予算はどのくらいですか？宣伝資料を準備する必要がありますか？
田中：予算は3万円以内に抑え、宣伝資料はマーケティング部が担当します。"

抽出結果：
- 新製品の発表は来週火曜日に決定
- プロジェクト予算は3万円以内に抑制
- 宣伝資料はマーケティング部が担当

【注意事項】
- 対話中の重要な事実、決定、重要情報を識別・抽出
- 多人対話には複数の情報ポイントが含まれる可能性があり、すべて抽出する必要あり
- 挨拶などの非重要内容は無視
- 曖昧な内容には最も合理的な解釈を採用
- 抽出された情報は必ず日本語で記述すること

【出力形式】
Markdown形式で出力し、各情報はダッシュで始める：
- 重要情報1
- 重要情報2
- ...
"#;

const USER_PROMPT_PREFIX: &str = "\n以下は多人対話の完全な文字起こし内容です。すべての重要情報を抽出し、日本語でMarkdown形式の項目として列挙してください：\n\n";

/// Schema name of the extraction output
pub const QUESTIONS_SCHEMA: &str = "client_questions";
/// Field of the structured output holding the extracted items
pub const QUESTIONS_FIELD: &str = "questions";

/// Turns a transcript into an ordered list of key points
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InformationExtractor: Send + Sync {
    async fn extract(&self, transcript: &str) -> Result<Vec<String>, ServiceError>;
}

/// Output schema `{ "questions": [string] }`
pub fn client_questions_format() -> ResponseFormat {
    ResponseFormat::new(
        QUESTIONS_SCHEMA,
        json!({
            "type": "object",
            "properties": {
                QUESTIONS_FIELD: {
                    "type": "array",
                    "items": {"type": "string"}
                }
            },
            "required": [QUESTIONS_FIELD],
            "additionalProperties": false
        }),
    )
}

/// Extractor backed by the generation gateway
#[derive(Debug, Clone)]
pub struct ExtractionService {
    gateway: Arc<Gateway>,
    provider: String,
}

impl ExtractionService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        let provider = gateway.router().provider().to_string();
        Self { gateway, provider }
    }

    /// Request sent for one transcript
    pub fn build_request(&self, transcript: &str) -> GenerationRequest {
        GenerationRequest::new(SYSTEM_PROMPT, format!("{}{}", USER_PROMPT_PREFIX, transcript))
            .with_response_format(client_questions_format())
            .with_temperature(0.0)
            .with_provider(self.provider.as_str())
            .with_mode(Mode::Chat.as_str())
    }
}

#[async_trait]
impl InformationExtractor for ExtractionService {
    async fn extract(&self, transcript: &str) -> Result<Vec<String>, ServiceError> {
        let request = self.build_request(transcript);
        let output = self.gateway.generate(&request).await?;

        let Some(map) = output.into_structured() else {
            return Err(ServiceError::data_processing(
                "Expected structured output from the model",
            ));
        };

        let items = match map.get(QUESTIONS_FIELD) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>(),
            _ => None,
        };

        let items = items.ok_or_else(|| {
            ServiceError::data_processing("Model output is missing a list of strings")
                .with_detail("field", QUESTIONS_FIELD)
        })?;

        debug!(count = items.len(), "Extracted key information");
        Ok(items)
    }
}

/// Extract key information from a transcript file
///
/// Blank lines are dropped and the remaining lines joined with `\n`. A file
/// with no content is rejected before the extractor runs.
pub async fn extract_from_file(
    extractor: &dyn InformationExtractor,
    reader: &FileReader,
    path: impl AsRef<Path>,
) -> Result<Vec<String>, ServiceError> {
    let path = path.as_ref();
    let lines = reader.read_lines(path).await?;

    if lines.is_empty() {
        return Err(
            ServiceError::validation("Transcript content must not be empty")
                .with_detail("file_path", path.display().to_string()),
        );
    }

    debug!(lines = lines.len(), "Loaded transcript from file");
    extractor.extract(&lines.join("\n")).await
}
