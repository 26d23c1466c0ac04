//! XML rendering for answers.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <xml><answer answered="yes" status="normal" pid="liveqa" qid="q1" time="812"><content>…</content><resources></resources></answer></xml>
//! ```

use liveqa_domain::AnswerWrapper;
use std::borrow::Cow;

/// XML declaration preceding every answer document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Renders [`AnswerWrapper`]s as XML documents.
pub struct XmlRenderer;

impl XmlRenderer {
    /// Render the wrapper element alone.
    pub fn render(wrapper: &AnswerWrapper) -> String {
        let answer = wrapper.answer();
        let answered = if answer.status().is_answered() {
            "yes"
        } else {
            "no"
        };

        format!(
            r#"<xml><answer answered="{}" status="{}" pid="{}" qid="{}" time="{}"><content>{}</content><resources>{}</resources></answer></xml>"#,
            answered,
            answer.status(),
            escape(answer.pid()),
            escape(answer.qid()),
            answer.time_ms(),
            escape(answer.content()),
            escape(&answer.resources_joined()),
        )
    }

    /// Render a complete document: declaration line, wrapper, trailing newline.
    pub fn render_document(wrapper: &AnswerWrapper) -> String {
        format!("{}\n{}\n", XML_DECLARATION, Self::render(wrapper))
    }
}

/// Escape text for use in XML content and attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use liveqa_domain::{Answer, Question};
    use std::time::Duration;

    fn question() -> Question {
        Question::new("q1", "body").unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape(r#"a < b & "c" > 'd'"#),
            "a &lt; b &amp; &quot;c&quot; &gt; &apos;d&apos;"
        );
    }

    #[test]
    fn test_render_normal_answer() {
        let wrapper = AnswerWrapper::new(Answer::normal("pid-1", &question(), "Use <Rust> & be happy"));
        let xml = XmlRenderer::render(&wrapper);

        assert!(xml.starts_with("<xml><answer answered=\"yes\" status=\"normal\" pid=\"pid-1\" qid=\"q1\" time=\""));
        assert!(xml.contains("<content>Use &lt;Rust&gt; &amp; be happy</content>"));
        assert!(xml.contains("<resources></resources>"));
        assert!(xml.ends_with("</answer></xml>"));
    }

    #[test]
    fn test_render_timeout_answer_is_not_answered() {
        let wrapper = AnswerWrapper::new(Answer::timeout(
            "pid-1",
            &question(),
            Duration::from_millis(1000),
        ));
        let xml = XmlRenderer::render(&wrapper);

        assert!(xml.contains(r#"answered="no""#));
        assert!(xml.contains(r#"status="timeout""#));
    }

    #[test]
    fn test_render_document_has_declaration() {
        let wrapper = AnswerWrapper::new(Answer::error("pid-1", &question(), "boom"));
        let doc = XmlRenderer::render_document(&wrapper);

        let mut lines = doc.lines();
        assert_eq!(lines.next(), Some(XML_DECLARATION));
        assert!(lines.next().unwrap().contains(r#"status="error""#));
        assert!(doc.ends_with('\n'));
    }
}
