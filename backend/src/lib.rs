pub mod error;
pub mod generate;
pub mod prompt;
pub mod routes;

/// One request body shared by all four endpoints. Fields an operation does
/// not consume default to empty, matching the original wire contract.
#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct Query {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub text_to_be_improved: String,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

#[derive(serde::Serialize, Debug, Clone)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(serde::Serialize, Debug, Clone)]
pub struct GrammarResponse {
    pub text_to_be_improved: String,
}

#[derive(serde::Serialize, Debug, Clone)]
pub struct InformationResponse {
    pub information: String,
}

#[derive(serde::Serialize, Debug, Clone)]
pub struct MailResponse {
    pub mail_content: String,
}
