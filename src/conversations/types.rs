use serde_json::Value;

/// Answer extracted from a response turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// The response carried output text.
    Text(String),
    /// No output text was found; the whole response object is kept.
    Raw(Value),
}

impl Answer {
    /// Pull the output text out of a Responses API object.
    ///
    /// A top-level `output_text` string wins. Otherwise every `output_text`
    /// content part of the `output` items is concatenated in order. When
    /// neither exists the response is returned as [`Answer::Raw`].
    pub fn from_response(response: Value) -> Self {
        if let Some(text) = response.get("output_text").and_then(Value::as_str) {
            return Answer::Text(text.to_string());
        }

        let text = {
            let parts: Vec<&str> = response
                .get("output")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
                .filter_map(|item| item.get("content").and_then(Value::as_array))
                .flatten()
                .filter(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect();
            (!parts.is_empty()).then(|| parts.concat())
        };

        match text {
            Some(text) => Answer::Text(text),
            None => Answer::Raw(response),
        }
    }

    /// True when no output text was found.
    pub fn is_raw(&self) -> bool {
        matches!(self, Answer::Raw(_))
    }

    /// Text shown to the user. Raw responses render as their JSON form.
    pub fn into_text(self) -> String {
        match self {
            Answer::Text(text) => text,
            Answer::Raw(response) => response.to_string(),
        }
    }
}

/// One question/answer exchange and the conversation it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub question: String,
    pub answer: Answer,
    pub thread_id: String,
}
