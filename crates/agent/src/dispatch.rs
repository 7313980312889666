//! Maps raw classifier text onto exactly one reply strategy.
//!
//! Routes are evaluated top to bottom and the first guard that matches wins.
//! The table always ends in an unconditional fallback, so selection never fails.

use nextplay_core::{Channel, ClassificationResult, Intent, Message, Reply};
use tracing::info;

use crate::handlers::{
    CallScheduler, EmailResponder, GeneralAssistant, HandlerStrategy, PaymentConfirmation,
    SalesCloser, SellerInquiry, SupportAgent,
};
use crate::llm::{CompletionService, ServiceError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteGuard {
    /// Classifier text contains the intent's marker.
    Marker(Intent),
    /// Inbound message arrived on this channel.
    Channel(Channel),
}

impl RouteGuard {
    pub fn matches(&self, classification: &ClassificationResult, message: &Message) -> bool {
        match self {
            Self::Marker(intent) => classification.contains_marker(*intent),
            Self::Channel(channel) => message.channel() == channel,
        }
    }
}

pub struct Route {
    guard: Option<RouteGuard>,
    intent: Intent,
    handler: Box<dyn HandlerStrategy>,
}

impl Route {
    pub fn guard(&self) -> Option<&RouteGuard> {
        self.guard.as_ref()
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn handler_name(&self) -> &'static str {
        self.handler.name()
    }
}

pub struct Dispatcher {
    routes: Vec<Route>,
    fallback: Route,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

impl Dispatcher {
    pub fn new<H>(fallback_intent: Intent, fallback: H) -> Self
    where
        H: HandlerStrategy + 'static,
    {
        Self {
            routes: Vec::new(),
            fallback: Route { guard: None, intent: fallback_intent, handler: Box::new(fallback) },
        }
    }

    /// Appends a guarded route after the existing ones.
    pub fn route<H>(mut self, guard: RouteGuard, intent: Intent, handler: H) -> Self
    where
        H: HandlerStrategy + 'static,
    {
        self.routes.push(Route { guard: Some(guard), intent, handler: Box::new(handler) });
        self
    }

    /// BUY, SELL, SUPPORT, PAYMENT, CALL markers in that order, then the email
    /// channel, then the general assistant.
    pub fn standard() -> Self {
        Self::new(Intent::General, GeneralAssistant)
            .route(RouteGuard::Marker(Intent::Buy), Intent::Buy, SalesCloser)
            .route(RouteGuard::Marker(Intent::Sell), Intent::Sell, SellerInquiry)
            .route(RouteGuard::Marker(Intent::Support), Intent::Support, SupportAgent)
            .route(RouteGuard::Marker(Intent::Payment), Intent::Payment, PaymentConfirmation)
            .route(RouteGuard::Marker(Intent::Call), Intent::Call, CallScheduler)
            .route(RouteGuard::Channel(Channel::Email), Intent::General, EmailResponder)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().chain(std::iter::once(&self.fallback))
    }

    pub fn select(&self, classification: &ClassificationResult, message: &Message) -> &Route {
        self.routes
            .iter()
            .find(|route| {
                route.guard.as_ref().is_some_and(|guard| guard.matches(classification, message))
            })
            .unwrap_or(&self.fallback)
    }

    pub async fn dispatch(
        &self,
        classification: ClassificationResult,
        message: &Message,
        completion: &dyn CompletionService,
        correlation_id: &str,
    ) -> Result<Reply, ServiceError> {
        let route = self.select(&classification, message);

        info!(
            event_name = "agent.dispatch.route_selected",
            correlation_id = correlation_id,
            intent = %route.intent,
            handler = route.handler_name(),
            channel = %message.channel(),
            "dispatching to reply strategy"
        );

        let text = route.handler.respond(message, completion).await?;

        info!(
            event_name = "agent.dispatch.handler_completed",
            correlation_id = correlation_id,
            handler = route.handler_name(),
            reply_chars = text.chars().count(),
            "reply strategy completed"
        );

        Ok(Reply::new(route.intent, classification, route.handler_name(), text))
    }
}
