mod call_outcome;
mod u_message;
mod u_payload;

pub use call_outcome::{CallOutcome, MalformedReason, RejectReason};
pub use u_message::UMessage;
pub use u_payload::{UPayload, UPayloadFormat};
