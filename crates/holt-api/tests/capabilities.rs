//! Per-domain capability behavior over the in-memory node

use holt_api::{ApiOptions, NodeApi};
use holt_core::{Block, Cid, DagNode, HoltError, PeerId, PinKind};
use holt_testkit::{store_chain, test_node, MemPeerHost};

#[tokio::test]
async fn files_roundtrip_small_content() {
    let api = NodeApi::new(test_node(), ApiOptions::new()).expect("construction");
    let cid = api.files().add(b"hello holt").await.expect("add");
    assert_eq!(api.files().cat(&cid).await.expect("cat"), b"hello holt");

    // Small content is a single leaf: no links to list.
    assert!(api.files().ls(&cid).await.expect("ls").is_empty());
}

#[tokio::test]
async fn files_chunk_large_content_in_order() {
    let api = NodeApi::new(test_node(), ApiOptions::new()).expect("construction");

    // Three chunks with distinct fill bytes so reordering would be caught.
    let mut data = Vec::new();
    data.extend(std::iter::repeat(1u8).take(256 * 1024));
    data.extend(std::iter::repeat(2u8).take(256 * 1024));
    data.extend(std::iter::repeat(3u8).take(10));

    let cid = api.files().add(&data).await.expect("add");
    assert_eq!(api.files().cat(&cid).await.expect("cat"), data);

    let links = api.files().ls(&cid).await.expect("ls");
    assert_eq!(links.len(), 3);
    assert_eq!(links[0].name, "chunk-0");
    assert_eq!(links[2].name, "chunk-2");
}

#[tokio::test]
async fn blocks_roundtrip_and_stat() {
    let api = NodeApi::new(test_node(), ApiOptions::new()).expect("construction");
    let block = api.block().put(b"raw bytes".to_vec()).await.expect("put");

    assert_eq!(api.block().get(block.cid()).await.expect("get"), b"raw bytes");
    let stat = api.block().stat(block.cid()).await.expect("stat");
    assert_eq!(stat.size, 9);
    assert_eq!(stat.cid, *block.cid());

    api.block().rm(block.cid()).await.expect("rm");
    assert!(matches!(
        api.block().get(block.cid()).await,
        Err(HoltError::NotFound { .. })
    ));
}

#[tokio::test]
async fn block_get_falls_through_to_the_exchange() {
    let node = test_node();
    let api = NodeApi::new(node.clone(), ApiOptions::new()).expect("construction");

    let remote = Block::new(b"remote bytes".to_vec());
    node.seed_remote_block(remote.clone());

    assert_eq!(
        api.block().get(remote.cid()).await.expect("get"),
        b"remote bytes"
    );
    // Fetched blocks are cached locally afterwards.
    let stat = api.block().stat(remote.cid()).await.expect("stat");
    assert_eq!(stat.size, 12);
}

#[tokio::test]
async fn dag_resolves_paths_through_links() {
    let node = test_node();
    let api = NodeApi::new(node.clone(), ApiOptions::new()).expect("construction");

    let chain = store_chain(&*holt_core::Node::dag(node.as_ref()), 3)
        .await
        .expect("chain");
    let leaf = chain[0];
    let root = chain[2];

    let resolved = api
        .dag()
        .resolve(&format!("{root}/next/next"))
        .await
        .expect("resolve");
    assert_eq!(resolved, leaf);

    assert!(matches!(
        api.dag().resolve(&format!("{root}/missing")).await,
        Err(HoltError::NotFound { .. })
    ));
    assert!(matches!(
        api.dag().resolve("").await,
        Err(HoltError::InvalidInput { .. })
    ));
}

#[tokio::test]
async fn objects_edit_links_immutably() {
    let api = NodeApi::new(test_node(), ApiOptions::new()).expect("construction");

    let child = api
        .object()
        .put(DagNode::leaf(b"child".to_vec()))
        .await
        .expect("put child");
    let parent = api.object().new_node().await.expect("new node");

    let linked = api
        .object()
        .add_link(&parent, "kid", &child)
        .await
        .expect("add link");
    assert_ne!(linked, parent);

    let links = api.object().links(&linked).await.expect("links");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].cid, child);

    // Duplicate names are rejected; the original node is unchanged.
    assert!(matches!(
        api.object().add_link(&linked, "kid", &child).await,
        Err(HoltError::InvalidInput { .. })
    ));
    assert!(api.object().links(&parent).await.expect("links").is_empty());

    let unlinked = api
        .object()
        .rm_link(&linked, "kid")
        .await
        .expect("rm link");
    assert!(api.object().links(&unlinked).await.expect("links").is_empty());

    let stat = api.object().stat(&linked).await.expect("stat");
    assert_eq!(stat.num_links, 1);
    assert_eq!(stat.cid, linked);
}

#[tokio::test]
async fn pins_cover_what_they_promise() {
    let node = test_node();
    let api = NodeApi::new(node.clone(), ApiOptions::new()).expect("construction");

    // Pinning something the node does not hold fails.
    let missing = Cid::for_data(b"nowhere");
    assert!(matches!(
        api.pin().add(&missing, PinKind::Direct).await,
        Err(HoltError::NotFound { .. })
    ));

    let chain = store_chain(&*holt_core::Node::dag(node.as_ref()), 3)
        .await
        .expect("chain");
    let root = chain[2];

    api.pin()
        .add(&root, PinKind::Recursive)
        .await
        .expect("recursive pin");
    assert!(api.pin().is_pinned(&root).await.expect("is_pinned"));

    let entries = api.pin().ls().await.expect("ls");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, PinKind::Recursive);

    assert!(api.pin().rm(&root).await.expect("rm"));
    assert!(!api.pin().is_pinned(&root).await.expect("is_pinned"));
    assert!(!api.pin().rm(&root).await.expect("rm absent"));
}

#[tokio::test]
async fn gc_removes_only_unpinned_blocks() {
    let api = NodeApi::new(test_node(), ApiOptions::new()).expect("construction");

    let data = vec![5u8; 600_000];
    let root = api.files().add(&data).await.expect("add");
    api.pin()
        .add(&root, PinKind::Recursive)
        .await
        .expect("pin");

    let loose = api.block().put(b"loose".to_vec()).await.expect("put");

    let removed = api.block().gc().await.expect("gc");
    assert!(removed.contains(loose.cid()));
    assert!(matches!(
        api.block().get(loose.cid()).await,
        Err(HoltError::NotFound { .. })
    ));

    // Everything under the recursive pin survives.
    assert_eq!(api.files().cat(&root).await.expect("cat"), data);
}

#[tokio::test]
async fn name_publish_resolve_roundtrip_bumps_sequence() {
    let api = NodeApi::new(test_node(), ApiOptions::new()).expect("construction");

    let first = api.files().add(b"v1").await.expect("add");
    let record = api.name().publish(&first, false).await.expect("publish");
    assert_eq!(record.sequence, 0);

    let name = holt_core::IpnsName::for_peer(api.identity());
    assert_eq!(api.name().resolve(&name, false).await.expect("resolve"), first);

    let second = api.files().add(b"v2").await.expect("add");
    let record = api.name().publish(&second, false).await.expect("publish");
    assert_eq!(record.sequence, 1);
    assert_eq!(api.name().resolve(&name, false).await.expect("resolve"), second);
}

#[tokio::test]
async fn keys_sign_and_verify() {
    let api = NodeApi::new(test_node(), ApiOptions::new()).expect("construction");

    let keys = api.key().list();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].name, "self");
    assert_eq!(keys[0].id, api.identity());

    let signature = api.key().sign(b"message");
    assert!(api.key().verify(b"message", &signature));
    assert!(!api.key().verify(b"other message", &signature));
}

#[tokio::test]
async fn swarm_tracks_connections_and_addresses() {
    let api = NodeApi::new(test_node(), ApiOptions::new()).expect("construction");

    let addr = "/memory/peer-one";
    let peer = api.swarm().connect(addr).await.expect("connect");
    assert_eq!(peer, MemPeerHost::peer_for_addr(addr));

    assert_eq!(api.swarm().peers().await.expect("peers"), vec![peer]);
    assert_eq!(
        api.swarm().known_addrs(&peer).await.expect("addrs"),
        vec![addr.to_string()]
    );
    assert!(!api.swarm().local_addrs().await.expect("local").is_empty());

    api.swarm().disconnect(addr).await.expect("disconnect");
    assert!(api.swarm().peers().await.expect("peers").is_empty());
    assert!(matches!(
        api.swarm().disconnect(addr).await,
        Err(HoltError::NotFound { .. })
    ));
}

#[tokio::test]
async fn pubsub_delivers_published_messages() {
    let node = test_node();
    let api = NodeApi::new(node.clone(), ApiOptions::new()).expect("construction");

    let mut subscription = api.pubsub().subscribe("events").await.expect("subscribe");
    api.pubsub()
        .publish("events", b"payload".to_vec())
        .await
        .expect("publish");

    let message = subscription.next().await.expect("message");
    assert_eq!(message.data, b"payload");
    assert_eq!(message.from, api.identity());
    assert_eq!(message.topic, "events");

    assert_eq!(api.pubsub().ls().await.expect("ls"), vec!["events"]);

    let peer = PeerId::from_bytes([9u8; 32]);
    node.pubsub_handle().add_topic_peer("events", peer);
    assert_eq!(
        api.pubsub().peers("events").await.expect("peers"),
        vec![peer]
    );
}

#[tokio::test]
async fn dht_provides_only_local_content() {
    let node = test_node();
    let api = NodeApi::new(node.clone(), ApiOptions::new()).expect("construction");

    let missing = Cid::for_data(b"not stored");
    assert!(matches!(
        api.dht().provide(&missing, false).await,
        Err(HoltError::NotFound { .. })
    ));

    let block = api.block().put(b"stored".to_vec()).await.expect("put");
    api.dht().provide(block.cid(), false).await.expect("provide");
    assert_eq!(node.routing_handle().provided(), vec![*block.cid()]);

    let provider = PeerId::from_bytes([3u8; 32]);
    node.routing_handle().add_provider(*block.cid(), provider);
    assert_eq!(
        api.dht()
            .find_providers(block.cid(), false)
            .await
            .expect("providers"),
        vec![provider]
    );

    node.routing_handle().add_peer_addr(provider, "/memory/provider");
    assert_eq!(
        api.dht().find_peer(&provider, false).await.expect("peer"),
        vec!["/memory/provider".to_string()]
    );
}
