use mpa_checker::{Checker, Diagnostic, Report, Rule};
use mpa_vocab::Vocabulary;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to JavaScript
#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub filename: String,
    pub correct: bool,
    pub total_lines: usize,
    pub violated_rules: Vec<&'static str>,
    pub duplicate_ids: Vec<String>,
    pub diagnostics: Vec<SerializableDiagnostic>,
}

#[derive(Debug, Serialize)]
pub struct SerializableDiagnostic {
    pub line: Option<u32>,
    pub rule: Option<&'static str>,
    pub message: String,
}

impl From<&Diagnostic> for SerializableDiagnostic {
    fn from(d: &Diagnostic) -> Self {
        Self {
            line: d.line.map(u32::from),
            rule: d.rule.map(Rule::name),
            message: d.message.clone(),
        }
    }
}

impl From<Report> for CheckSummary {
    fn from(report: Report) -> Self {
        let violated = report.violated_rules();
        Self {
            violated_rules: Rule::ALL
                .into_iter()
                .filter(|rule| violated.contains(rule.flag()))
                .map(Rule::name)
                .collect(),
            diagnostics: report.diagnostics.iter().map(Into::into).collect(),
            filename: report.filename,
            correct: report.correct,
            total_lines: report.total_lines,
            duplicate_ids: report.duplicate_ids,
        }
    }
}

/// Checker instance living in the browser editor.
#[wasm_bindgen]
#[derive(Default)]
pub struct MpaChecker {
    // None means the built-in CDLI vocabulary.
    vocab: Option<Vocabulary>,
}

#[wasm_bindgen]
impl MpaChecker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { vocab: None }
    }

    /// Uses a JSON vocabulary (same format as the CLI `--vocab` file).
    #[wasm_bindgen(js_name = withVocabulary)]
    pub fn with_vocabulary(json: &str) -> Result<MpaChecker, JsError> {
        Ok(Self {
            vocab: Some(Vocabulary::from_json(json)?),
        })
    }

    /// Text -> Checker -> JSON
    pub fn check(&self, filename: &str, text: &str) -> Result<JsValue, JsError> {
        let summary = self.summarize(filename, text);
        serde_wasm_bindgen::to_value(&summary).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl MpaChecker {
    pub fn summarize(&self, filename: &str, text: &str) -> CheckSummary {
        let vocab = self.vocab.as_ref().unwrap_or_else(|| Vocabulary::builtin());
        Checker::new(vocab).check_str(filename, text).into()
    }
}
