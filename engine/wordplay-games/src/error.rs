use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content pack has no {0}")]
    Empty(&'static str),
    #[error("question {id} has answer index {answer} but only {choices} choices")]
    BadAnswer { id: u32, answer: u32, choices: usize },
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
}
