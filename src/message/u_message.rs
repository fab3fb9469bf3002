use super::{CallOutcome, UPayload};
use crate::attributes::UAttributes;

/// The decoded outcome of one RPC call.
///
/// A message is only valid when it carries both a non-empty payload and
/// attributes, which is exactly when its outcome is [`CallOutcome::Resolved`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UMessage {
    payload: Option<UPayload>,
    attributes: Option<UAttributes>,
    outcome: CallOutcome,
}

impl UMessage {
    pub fn resolved(payload: UPayload, attributes: UAttributes) -> Self {
        Self {
            payload: Some(payload),
            attributes: Some(attributes),
            outcome: CallOutcome::Resolved,
        }
    }

    pub fn empty(outcome: CallOutcome) -> Self {
        Self {
            payload: None,
            attributes: None,
            outcome,
        }
    }

    pub fn is_empty(&self) -> bool {
        match (&self.payload, &self.attributes) {
            (Some(payload), Some(_)) => payload.is_empty(),
            _ => true,
        }
    }

    pub fn payload(&self) -> Option<&UPayload> {
        self.payload.as_ref()
    }

    pub fn attributes(&self) -> Option<&UAttributes> {
        self.attributes.as_ref()
    }

    pub fn outcome(&self) -> &CallOutcome {
        &self.outcome
    }

    pub fn into_parts(self) -> (Option<UPayload>, Option<UAttributes>, CallOutcome) {
        (self.payload, self.attributes, self.outcome)
    }
}
