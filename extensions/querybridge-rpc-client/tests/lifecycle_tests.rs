use querybridge_mem_session::{MemSession, MemSessionProvider};
use querybridge_rpc_client::{RpcBridge, RpcBridgeError, RpcClientConfig};
use std::sync::Arc;

fn test_bridge() -> (RpcBridge, Arc<MemSessionProvider>) {
    let provider = MemSessionProvider::new(MemSession::new());
    let bridge = RpcBridge::new(provider.clone(), RpcClientConfig::default());
    (bridge, provider)
}

#[tokio::test]
async fn test_n_acquires_and_n_minus_one_releases_stay_ready() {
    let (bridge, provider) = test_bridge();

    let mut clients: Vec<_> = (0..5).map(|_| bridge.acquire().unwrap()).collect();
    assert_eq!(bridge.ref_count(), 5);
    assert_eq!(provider.open_count(), 1);

    let last = clients.pop().unwrap();
    for client in clients {
        client.release().unwrap();
    }

    assert!(bridge.is_ready());
    assert_eq!(bridge.ref_count(), 1);
    assert_eq!(provider.close_count(), 0);

    last.release().unwrap();

    assert!(!bridge.is_ready());
    assert_eq!(bridge.ref_count(), 0);
    assert_eq!(provider.close_count(), 1);
}

#[tokio::test]
async fn test_dropping_client_releases() {
    let (bridge, provider) = test_bridge();

    {
        let _client = bridge.acquire().unwrap();
        assert!(bridge.is_ready());
    }

    assert!(!bridge.is_ready());
    assert_eq!(bridge.ref_count(), 0);
    assert_eq!(provider.close_count(), 1);
}

#[tokio::test]
async fn test_clone_registers_another_user() {
    let (bridge, provider) = test_bridge();

    let client = bridge.acquire().unwrap();
    let cloned = client.clone();
    assert_eq!(bridge.ref_count(), 2);

    drop(client);
    assert!(bridge.is_ready());

    drop(cloned);
    assert_eq!(bridge.ref_count(), 0);
    assert_eq!(provider.open_count(), 1);
    assert_eq!(provider.close_count(), 1);
}

#[tokio::test]
async fn test_open_failure_leaves_count_unchanged() {
    let (bridge, provider) = test_bridge();
    provider.set_fail_open(true);

    let result = bridge.acquire();
    assert!(matches!(result, Err(RpcBridgeError::Unavailable(_))));
    assert_eq!(bridge.ref_count(), 0);
    assert!(!bridge.is_ready());

    provider.set_fail_open(false);
    let _client = bridge.acquire().unwrap();
    assert_eq!(bridge.ref_count(), 1);
}

#[tokio::test]
async fn test_close_failure_is_reported() {
    let (bridge, provider) = test_bridge();
    let client = bridge.acquire().unwrap();

    provider.set_fail_close(true);

    assert!(matches!(
        client.release(),
        Err(RpcBridgeError::Unavailable(_))
    ));
    // The count still reaches zero; only the teardown status is reported.
    assert_eq!(bridge.ref_count(), 0);
    assert!(!bridge.is_ready());
}

#[tokio::test]
async fn test_reacquire_after_teardown_reopens_session() {
    let (bridge, provider) = test_bridge();

    bridge.acquire().unwrap().release().unwrap();
    let _client = bridge.acquire().unwrap();

    assert_eq!(provider.open_count(), 2);
    assert_eq!(provider.close_count(), 1);
    assert!(bridge.is_ready());
}

#[test]
fn test_acquire_without_runtime_is_unavailable() {
    let (bridge, provider) = test_bridge();

    let result = bridge.acquire();

    assert!(matches!(result, Err(RpcBridgeError::Unavailable(_))));
    assert_eq!(bridge.ref_count(), 0);
    // The session opened for the failed attempt is closed again.
    assert_eq!(provider.open_count(), 1);
    assert_eq!(provider.close_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_acquire_opens_session_once() {
    let (bridge, provider) = test_bridge();

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let bridge = bridge.clone();
            tokio::task::spawn_blocking(move || bridge.acquire().unwrap())
        })
        .collect();

    let mut clients = Vec::new();
    for task in tasks {
        clients.push(task.await.unwrap());
    }

    assert_eq!(provider.open_count(), 1);
    assert_eq!(bridge.ref_count(), 8);

    drop(clients);
    assert_eq!(bridge.ref_count(), 0);
    assert_eq!(provider.close_count(), 1);
}

#[tokio::test]
async fn test_global_bridge_is_installed_once() {
    let first = MemSessionProvider::new(MemSession::new());
    let second = MemSessionProvider::new(MemSession::new());

    let installed = RpcBridge::install_global(first.clone(), RpcClientConfig::default());
    let again = RpcBridge::install_global(second.clone(), RpcClientConfig::default());

    assert!(std::ptr::eq(installed, again));
    assert!(std::ptr::eq(installed, RpcBridge::global().unwrap()));

    let client = installed.acquire().unwrap();
    assert_eq!(first.open_count(), 1);
    assert_eq!(second.open_count(), 0);
    client.release().unwrap();
}
