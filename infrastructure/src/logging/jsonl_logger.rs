//! JSONL file writer for answer events.
//!
//! Each [`AnswerEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use liveqa_application::{AnswerEvent, AnswerLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL answer logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing file so
/// restarts keep the history. Flushes on `Drop`.
pub struct JsonlAnswerLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAnswerLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create answer log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open answer log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnswerLogger for JsonlAnswerLogger {
    fn log(&self, event: AnswerEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAnswerLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.jsonl");
        let logger = JsonlAnswerLogger::new(&path).unwrap();

        logger.log(AnswerEvent::new(
            "answer_dispatched",
            serde_json::json!({ "qid": "q1", "status": "normal", "time_ms": 120 }),
        ));
        logger.log(AnswerEvent::new(
            "answer_dispatched",
            serde_json::json!({ "qid": "q2", "status": "timeout", "time_ms": 50000 }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line["type"], "answer_dispatched");
            assert!(line.get("timestamp").is_some());
        }
        assert_eq!(lines[0]["qid"], "q1");
        assert_eq!(lines[1]["status"], "timeout");
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.jsonl");
        let logger = JsonlAnswerLogger::new(&path).unwrap();

        logger.log(AnswerEvent::new("note", serde_json::json!("just a string")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("answers.jsonl");

        for qid in ["q1", "q2"] {
            let logger = JsonlAnswerLogger::new(&path).unwrap();
            logger.log(AnswerEvent::new(
                "answer_dispatched",
                serde_json::json!({ "qid": qid }),
            ));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["qid"], "q2");
    }
}
