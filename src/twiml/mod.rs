// Minimal TwiML document builder.
// Only the verbs this service actually speaks are modeled.

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A voice-response document instructing the telephony platform what to do
/// during a call. Verbs are appended in order and serialized by `to_xml()`.
#[derive(Clone, Debug, Default)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

#[derive(Clone, Debug)]
enum Verb {
    Say(String),
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a spoken-text instruction.
    pub fn say(mut self, text: impl Into<String>) -> Self {
        self.verbs.push(Verb::Say(text.into()));
        self
    }

    /// Serializes the document. Verb text is escaped; the surrounding markup
    /// is fixed, so serialization cannot fail.
    pub fn to_xml(&self) -> String {
        let mut out: String = String::from(XML_DECLARATION);
        out.push_str("<Response>");

        for verb in &self.verbs {
            match verb {
                Verb::Say(text) => {
                    out.push_str("<Say>");
                    out.push_str(&escape_text(text));
                    out.push_str("</Say>");
                }
            }
        }

        out.push_str("</Response>");
        out
    }
}

/// Escapes the characters XML forbids in text nodes.
fn escape_text(raw: &str) -> String {
    let mut escaped: String = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
