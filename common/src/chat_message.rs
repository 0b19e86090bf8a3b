//! Messages exchanged with the document Q&A helper.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSource {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub content: String,
    pub sources: Vec<ChatSource>,
    pub confidence: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
    pub sources: Vec<ChatSource>,
    pub confidence: Option<f32>,
}

pub const CHAT_GREETING: &str = "Hi! I'm here to help you understand your medical document. You can ask me questions about your diagnosis, medications, or what any of the medical terms mean.";
