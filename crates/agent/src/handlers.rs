//! Reply strategies, one per routing outcome.
//!
//! Model-backed strategies make exactly one completion call. Payment and call
//! scheduling are pure templates and never touch the completion service.

use async_trait::async_trait;
use nextplay_core::Message;

use crate::llm::{CompletionService, ServiceError};

pub const SALES_ROLE: &str = "You are a professional AI sales closer.";
pub const SUPPORT_ROLE: &str = "You are a helpful customer support agent.";
pub const EMAIL_ROLE: &str = "You are a professional business email assistant.";
pub const GENERAL_ROLE: &str = "You are an intelligent business assistant.";

/// Stand-in text sent to the sales closer for seller inquiries.
pub const SELLER_INQUIRY_TEXT: &str = "Handle seller inquiry";

pub const PAYMENT_READY_TEMPLATE: &str = "✅ Payment Ready\n\n\
Please complete your payment using the secure link below.\n\
Once paid, your order will be processed immediately.";

#[async_trait]
pub trait HandlerStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn respond(
        &self,
        message: &Message,
        completion: &dyn CompletionService,
    ) -> Result<String, ServiceError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SalesCloser;

#[async_trait]
impl HandlerStrategy for SalesCloser {
    fn name(&self) -> &'static str {
        "sales"
    }

    async fn respond(
        &self,
        message: &Message,
        completion: &dyn CompletionService,
    ) -> Result<String, ServiceError> {
        completion.complete(SALES_ROLE, &closing_prompt(message.text())).await
    }
}

/// Seller inquiries go to the sales closer with a fixed stand-in text; the
/// inbound message is not forwarded.
#[derive(Clone, Copy, Debug, Default)]
pub struct SellerInquiry;

#[async_trait]
impl HandlerStrategy for SellerInquiry {
    fn name(&self) -> &'static str {
        "seller_inquiry"
    }

    async fn respond(
        &self,
        _message: &Message,
        completion: &dyn CompletionService,
    ) -> Result<String, ServiceError> {
        completion.complete(SALES_ROLE, &closing_prompt(SELLER_INQUIRY_TEXT)).await
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SupportAgent;

#[async_trait]
impl HandlerStrategy for SupportAgent {
    fn name(&self) -> &'static str {
        "support"
    }

    async fn respond(
        &self,
        message: &Message,
        completion: &dyn CompletionService,
    ) -> Result<String, ServiceError> {
        completion.complete(SUPPORT_ROLE, message.text()).await
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PaymentConfirmation;

#[async_trait]
impl HandlerStrategy for PaymentConfirmation {
    fn name(&self) -> &'static str {
        "payment"
    }

    async fn respond(
        &self,
        _message: &Message,
        _completion: &dyn CompletionService,
    ) -> Result<String, ServiceError> {
        Ok(PAYMENT_READY_TEMPLATE.to_string())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CallScheduler;

impl CallScheduler {
    pub fn render(customer_name: &str) -> String {
        format!(
            "📞 Call Scheduled\n\nHi {customer_name}, our AI has scheduled a call for you.\n\
             Our representative will contact you shortly."
        )
    }
}

#[async_trait]
impl HandlerStrategy for CallScheduler {
    fn name(&self) -> &'static str {
        "call"
    }

    async fn respond(
        &self,
        message: &Message,
        _completion: &dyn CompletionService,
    ) -> Result<String, ServiceError> {
        Ok(Self::render(message.customer_name()))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EmailResponder;

#[async_trait]
impl HandlerStrategy for EmailResponder {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn respond(
        &self,
        message: &Message,
        completion: &dyn CompletionService,
    ) -> Result<String, ServiceError> {
        let prompt = format!("Reply professionally to this email:\n{}", message.text());
        completion.complete(EMAIL_ROLE, &prompt).await
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GeneralAssistant;

#[async_trait]
impl HandlerStrategy for GeneralAssistant {
    fn name(&self) -> &'static str {
        "general"
    }

    async fn respond(
        &self,
        message: &Message,
        completion: &dyn CompletionService,
    ) -> Result<String, ServiceError> {
        completion.complete(GENERAL_ROLE, message.text()).await
    }
}

fn closing_prompt(text: &str) -> String {
    format!("Close the deal professionally:\n{text}")
}
