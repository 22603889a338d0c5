use serde::{Deserialize, Serialize};

/// Difficulty rating of a question. Serialized as the bare variant name
/// ("Easy" / "Medium" / "Hard") in the output JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One multiple-choice trivia item: 4 distinct options, one correct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub category: String,
    pub difficulty: Difficulty,
}
