use crate::attributes::UPriority;

/// Attachment key under which the encoded `UAttributes` travel next to a
/// query or reply payload.
pub const ATTRIBUTES_ATTACHMENT_KEY: &str = "attributes";

/// The number of replies a single outstanding query may buffer before the
/// transport has to back off.
pub const REPLY_CHANNEL_CAPACITY: usize = 16;

/// The lowest priority accepted for outbound RPC requests.
pub const RPC_PRIORITY_FLOOR: UPriority = UPriority::Cs4;

/// Resource name that marks a resource identifier as an RPC endpoint.
pub const RPC_RESOURCE_NAME: &str = "rpc";

/// Instance name reserved for the response side of an RPC exchange.
pub const RPC_RESPONSE_INSTANCE: &str = "response";
