use serde::Serialize;

/// Value shown for one review detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReviewValue {
    Text(String),
    List(Vec<String>),
    /// YAML block
    Code(String),
    /// Explicit "nothing selected" state
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub label: &'static str,
    pub value: ReviewValue,
}

/// Read-only review of a pending launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewView {
    pub rows: Vec<ReviewRow>,
}

impl ReviewView {
    pub fn push(&mut self, label: &'static str, value: ReviewValue) {
        self.rows.push(ReviewRow { label, value });
    }

    pub fn get(&self, label: &str) -> Option<&ReviewValue> {
        self.rows.iter().find(|r| r.label == label).map(|r| &r.value)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.label).collect()
    }
}
