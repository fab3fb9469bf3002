mod mem_session;
mod mem_session_provider;
mod queryable;

pub use mem_session::MemSession;
pub use mem_session_provider::MemSessionProvider;
pub use queryable::{Queryable, echo_queryable};
