mod call_options;
pub mod constants;
mod config;
mod error;
mod reply_collector;
mod reply_future;
mod request_builder;
mod rpc_bridge;
mod rpc_client;
mod worker_pool;

pub use call_options::CallOptions;
pub use config::RpcClientConfig;
pub use error::{RpcBridgeError, RpcClientError, WorkerPoolError};
pub use reply_collector::{collect_reply, decode_reply};
pub use reply_future::ReplyFuture;
pub use request_builder::{PreparedRequest, RequestBuilder};
pub use rpc_bridge::RpcBridge;
pub use rpc_client::RpcClient;
pub use worker_pool::{TaskHandle, WorkerPool};
