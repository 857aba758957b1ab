//! Support Service - vendor chat with keyword auto-replies

use crate::seed;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use parking_lot::RwLock;
use shared::models::{FaqEntry, Sender, SendMessageResponse, SupportContact, SupportMessage};
use std::sync::Arc;

/// One day in milliseconds
const ONE_DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Reply for a vendor message, chosen by the first matching keyword group
pub fn auto_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["payment", "payout"]) {
        "For payment related queries, please check your Earnings page. If you have specific issues, our finance team will get back to you within 24 hours."
    } else if has(&["order", "customer"]) {
        "For order related issues, please provide the order ID and specific details so we can assist you better."
    } else if has(&["menu", "dish"]) {
        "For menu related queries, you can manage all your dishes from the Menu section. If you need specific help with food photography or pricing, we can arrange a call with our onboarding team."
    } else if has(&["account", "profile"]) {
        "For account related issues, please visit your Profile section. If you need to update your KYC documents, you can do so from the KYC section."
    } else {
        "Thank you for your message. Our support team will get back to you shortly. For immediate assistance, please call our vendor helpline at 1800-XXX-XXXX."
    }
}

#[derive(Debug)]
struct Conversation {
    messages: Vec<SupportMessage>,
    next_id: i64,
}

impl Conversation {
    fn push(&mut self, text: String, sender: Sender, timestamp: i64) -> SupportMessage {
        let message = SupportMessage {
            id: self.next_id,
            text,
            sender,
            timestamp,
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}

#[derive(Clone)]
pub struct SupportService {
    conversation: Arc<RwLock<Conversation>>,
}

impl std::fmt::Debug for SupportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupportService")
            .field("messages", &self.conversation.read().messages.len())
            .finish()
    }
}

impl SupportService {
    /// Start a conversation with the welcome message dated one day before `now`
    pub fn new(now: i64) -> Self {
        let mut conversation = Conversation {
            messages: Vec::new(),
            next_id: 1,
        };
        conversation.push(seed::WELCOME_MESSAGE.to_string(), Sender::Support, now - ONE_DAY_MS);
        Self {
            conversation: Arc::new(RwLock::new(conversation)),
        }
    }

    pub fn messages(&self) -> Vec<SupportMessage> {
        self.conversation.read().messages.clone()
    }

    /// Append the vendor's message and the automatic reply
    pub fn send(&self, text: &str) -> AppResult<SendMessageResponse> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::new(ErrorCode::SupportMessageEmpty));
        }
        validate_optional_text(&Some(text.to_string()), "text", MAX_NOTE_LEN)?;

        let now = shared::util::now_millis();
        let mut conversation = self.conversation.write();
        let message = conversation.push(text.to_string(), Sender::Vendor, now);
        let reply = conversation.push(auto_reply(text).to_string(), Sender::Support, now + 1);

        tracing::info!(message_id = message.id, "Support message received");
        Ok(SendMessageResponse { message, reply })
    }

    pub fn faq(&self) -> Vec<FaqEntry> {
        seed::faq()
    }

    pub fn contact(&self) -> SupportContact {
        seed::support_contact()
    }
}
