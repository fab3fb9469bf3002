use querybridge::attributes::UPriority;
use querybridge::uri::{UEntity, UResource, UUri};
use querybridge_mem_session::{MemSession, MemSessionProvider, echo_queryable};
use querybridge_rpc_client::{CallOptions, RpcBridge, RpcClientConfig};
use std::time::Duration;
use tokio::join;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let entity = UEntity::new("body.access").with_version(1);
    let update_door = UUri::local(entity.clone(), UResource::rpc("UpdateDoor"));
    let lock_window = UUri::local(entity, UResource::rpc("LockWindow"));

    // Only `UpdateDoor` has a server; calls to `LockWindow` expire.
    let session = MemSession::new();
    session.declare_rpc_method(&update_door, echo_queryable());

    let bridge = RpcBridge::install_global(
        MemSessionProvider::new(session),
        RpcClientConfig::default().with_request_timeout(Duration::from_millis(500)),
    );

    let client = match bridge.acquire() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Could not start RPC bridge: {}", e);
            return;
        }
    };

    // `join!` will await all responses before proceeding
    let (res1, res2, res3, res4) = join!(
        client.invoke(&update_door, "open", &CallOptions::default()),
        client.invoke(
            &update_door,
            "close",
            &CallOptions::new(UPriority::Cs6).with_ttl(Duration::from_millis(200)),
        ),
        client.invoke(&update_door, "open", &CallOptions::new(UPriority::Cs1)),
        client.invoke(&lock_window, "lock", &CallOptions::default()),
    );

    for (label, message) in [
        ("update_door(open)", res1),
        ("update_door(close, cs6)", res2),
        ("update_door(open, cs1)", res3),
        ("lock_window(lock)", res4),
    ] {
        let payload = message
            .payload()
            .map(|p| String::from_utf8_lossy(p.data()).into_owned());
        println!("Result from {}: {} {:?}", label, message.outcome(), payload);
    }

    if let Err(e) = client.release() {
        tracing::error!("Failed to release RPC bridge: {}", e);
    }
}
