mod attachment;
mod query;
mod reply;
mod reply_channel;
mod session;
mod transport_error;

pub use attachment::Attachment;
pub use query::Query;
pub use reply::{Reply, Sample};
pub use reply_channel::{ReplyChannel, ReplySender};
pub use session::{Session, SessionProvider};
pub use transport_error::TransportError;
