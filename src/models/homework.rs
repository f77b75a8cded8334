use serde_json::{Map, Value};

/// Тексты вердиктов по статусам проверки.
pub const HOMEWORK_VERDICTS: [(&str, &str); 3] = [
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// One reviewed submission, as reported by the homework API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    /// Stable diff key. The API documents an integer, but records with a
    /// string id are accepted; numeric ids are normalized to their decimal
    /// rendering so `1` and `"1"` identify the same submission.
    pub id: String,
    pub status: String,
    pub homework_name: String,
    pub reviewer_comment: Option<String>,
    pub date_updated: Option<String>,
    pub lesson_name: Option<String>,
}

impl Homework {
    /// Builds a record from a raw API object. Returns `None` when the record
    /// has no usable diff key (`id`) or comparison value (`status`); other
    /// fields are taken leniently.
    pub fn from_raw(raw: &Map<String, Value>) -> Option<Self> {
        let id = match raw.get("id") {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => return None,
        };
        let status = match raw.get("status") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => return None,
            // Mistyped statuses were already warned about by the schema pass;
            // their JSON rendering still diffs fine.
            Some(other) => other.to_string(),
        };
        Some(Self {
            id,
            status,
            homework_name: string_field(raw, "homework_name").unwrap_or_default(),
            reviewer_comment: string_field(raw, "reviewer_comment"),
            date_updated: string_field(raw, "date_updated"),
            lesson_name: string_field(raw, "lesson_name"),
        })
    }

    /// Display phrase for the record's status, when the status is documented.
    pub fn verdict(&self) -> Option<&'static str> {
        HOMEWORK_VERDICTS
            .iter()
            .find(|(status, _)| *status == self.status)
            .map(|(_, verdict)| *verdict)
    }
}

fn string_field(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_owned)
}
