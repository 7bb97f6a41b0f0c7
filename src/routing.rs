//! Chat routing: decide whether a message triggers the sales import.

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;
use ventas_core::message::{ChatAction, IncomingMessage};
use ventas_intent::{Detection, IntentMatcher};

/// Routing decision for one chat message.
#[derive(Debug, Clone, Serialize)]
pub struct RouteOutcome {
    pub message_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    pub action: ChatAction,
    pub detection: Detection,
}

/// Classify `msg`. The import itself is run by the caller.
pub fn route(matcher: &IntentMatcher, msg: &IncomingMessage) -> RouteOutcome {
    let detection = matcher.detect_value(&msg.text);
    let action = ChatAction::from_intent(detection.is_update());

    match action {
        ChatAction::ImportSales => info!(
            "routing: message {} from {} requests sales import ({detection:?})",
            msg.id,
            msg.sender.as_deref().unwrap_or("unknown")
        ),
        ChatAction::Chat => debug!("routing: message {} is chat ({detection:?})", msg.id),
    }

    RouteOutcome {
        message_id: msg.id,
        sender: msg.sender.clone(),
        action,
        detection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_update_request() {
        let matcher = IntentMatcher::new();
        let msg = IncomingMessage::from_text("Actualiza las ventas, porfa");
        let outcome = route(&matcher, &msg);
        assert_eq!(outcome.action, ChatAction::ImportSales);
        assert_eq!(outcome.message_id, msg.id);
    }

    #[test]
    fn test_route_negated_request_is_chat() {
        let matcher = IntentMatcher::new();
        let outcome = route(&matcher, &IncomingMessage::from_text("no lo actualices"));
        assert_eq!(outcome.action, ChatAction::Chat);
        assert!(matches!(outcome.detection, Detection::Negated { .. }));
    }

    #[test]
    fn test_route_non_string_text_is_chat() {
        let matcher = IntentMatcher::new();
        let mut msg = IncomingMessage::from_text("");
        msg.text = json!({"nested": "actualiza"});
        let outcome = route(&matcher, &msg);
        assert_eq!(outcome.action, ChatAction::Chat);
        assert_eq!(outcome.detection, Detection::Empty);
    }

    #[test]
    fn test_route_outcome_json_shape() {
        let matcher = IntentMatcher::new();
        let mut msg = IncomingMessage::from_text("sube los datos");
        msg.sender = Some("ana".into());
        let v = serde_json::to_value(route(&matcher, &msg)).unwrap();
        assert_eq!(v["action"], "import_sales");
        assert_eq!(v["sender"], "ana");
        assert_eq!(v["detection"]["rule"], "phrase");
        assert_eq!(v["detection"]["phrase"], "sube los datos");
    }
}
