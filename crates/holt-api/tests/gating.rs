//! Cross-cutting policy gates, exercised through the capability surface

use std::sync::Arc;

use holt_api::{ApiOptions, NodeApi};
use holt_core::{Cid, HoltError};
use holt_testkit::{offline_node, test_node, TestNode};

fn api_over(node: Arc<TestNode>) -> NodeApi {
    NodeApi::new(node, ApiOptions::new()).expect("construction")
}

#[tokio::test]
async fn routing_dependent_calls_fail_offline_without_opt_in() {
    let api = api_over(offline_node());
    let cid = Cid::for_data(b"content");
    let peer = api.identity();

    assert!(matches!(
        api.dht().find_providers(&cid, false).await,
        Err(HoltError::Offline)
    ));
    assert!(matches!(
        api.dht().find_peer(&peer, false).await,
        Err(HoltError::Offline)
    ));
    assert!(matches!(
        api.name().publish(&cid, false).await,
        Err(HoltError::Offline)
    ));
    assert!(matches!(
        api.swarm().connect("/memory/somewhere").await,
        Err(HoltError::Offline)
    ));
    assert!(matches!(
        api.pubsub().publish("topic", b"msg".to_vec()).await,
        Err(HoltError::Offline)
    ));
}

#[tokio::test]
async fn opting_into_offline_installs_the_fallback_once() {
    let node = offline_node();
    let api = api_over(node.clone());
    let cid = Cid::for_data(b"content");

    for _ in 0..3 {
        assert!(api.dht().find_providers(&cid, true).await.is_ok());
    }
    assert_eq!(node.offline_routing_installs(), 1);
}

#[tokio::test]
async fn concurrent_offline_opt_ins_install_exactly_once() {
    let node = offline_node();
    let api = Arc::new(api_over(node.clone()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let api = api.clone();
        handles.push(tokio::spawn(async move {
            let cid = Cid::for_data(format!("content-{i}").as_bytes());
            api.dht().find_providers(&cid, true).await
        }));
    }
    for handle in handles {
        handle.await.expect("task").expect("gated call");
    }
    assert_eq!(node.offline_routing_installs(), 1);
}

#[tokio::test]
async fn fallback_setup_failure_reaches_the_caller() {
    let node = TestNode::builder()
        .online(false)
        .fail_offline_setup(true)
        .build();
    let api = api_over(node);
    let cid = Cid::for_data(b"content");

    // Opting into offline never yields Offline itself; the fallback's own
    // failure is what surfaces.
    assert!(matches!(
        api.dht().find_providers(&cid, true).await,
        Err(HoltError::OfflineFallback { .. })
    ));
}

#[tokio::test]
async fn gate_reflects_live_status_changes() {
    let node = offline_node();
    let api = api_over(node.clone());
    let cid = Cid::for_data(b"content");

    assert!(matches!(
        api.dht().find_providers(&cid, false).await,
        Err(HoltError::Offline)
    ));

    node.set_online(true);
    assert!(api.dht().find_providers(&cid, false).await.is_ok());

    node.set_online(false);
    assert!(matches!(
        api.dht().find_providers(&cid, false).await,
        Err(HoltError::Offline)
    ));
}

#[tokio::test]
async fn publish_is_blocked_exactly_while_mounted() {
    let node = test_node();
    let api = api_over(node.clone());
    let cid = api.files().add(b"published content").await.expect("add");

    node.set_mount_active(true);
    assert!(matches!(
        api.name().publish(&cid, false).await,
        Err(HoltError::PublishConflict { .. })
    ));

    node.set_mount_active(false);
    let record = api.name().publish(&cid, false).await.expect("publish");
    assert_eq!(record.value, cid);

    node.set_mount_active(true);
    assert!(matches!(
        api.name().publish(&cid, false).await,
        Err(HoltError::PublishConflict { .. })
    ));
}

#[tokio::test]
async fn facade_stays_usable_after_gate_failures() {
    let node = offline_node();
    let api = api_over(node.clone());
    let cid = Cid::for_data(b"content");

    assert!(api.dht().find_providers(&cid, false).await.is_err());

    // Ungated capabilities keep working, and the failed gate recovers as
    // soon as the node comes back online.
    let block = api.block().put(b"still fine".to_vec()).await.expect("put");
    assert_eq!(api.block().get(block.cid()).await.expect("get"), b"still fine");

    node.set_online(true);
    assert!(api.dht().find_providers(&cid, false).await.is_ok());
}
