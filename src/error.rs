use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("required environment variables are not set: {0}")]
    MissingCredentials(String),

    #[error("request to the homework API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("homework API endpoint returned status {0}")]
    Endpoint(reqwest::StatusCode),

    #[error("homework API returned an empty answer")]
    EmptyAnswer,

    #[error("homework API answer has no \"homeworks\" key")]
    MissingHomeworksKey,

    #[error("malformed homework API answer: {0}")]
    WrongAnswer(String),

    #[error("telegram delivery failed: {0}")]
    Telegram(String),
}
