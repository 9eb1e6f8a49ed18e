use std::sync::Arc;

use serde_json::json;
use tea_house::{
    api,
    client::{ClientError, TeaClient},
    store::{InMemoryTeaStore, TeaDraft},
};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = api::create_router(Arc::new(InMemoryTeaStore::new()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });
    format!("http://{addr}")
}

fn draft(name: &str, price: i64) -> TeaDraft {
    TeaDraft {
        name: Some(json!(name)),
        price: Some(json!(price)),
    }
}

#[tokio::test]
async fn crud_scenario_over_the_wire() {
    let client = TeaClient::new(&spawn_server().await).expect("client");

    let created = client
        .create(&draft("Green Tea", 5))
        .await
        .expect("create");
    assert_eq!(
        serde_json::to_value(&created).unwrap(),
        json!({"id": 1, "name": "Green Tea", "price": 5})
    );
    assert_eq!(client.get(1).await.expect("get"), created);

    let updated = client
        .update(1, &draft("Oolong", 7))
        .await
        .expect("update");
    assert_eq!(
        serde_json::to_value(&updated).unwrap(),
        json!({"id": 1, "name": "Oolong", "price": 7})
    );

    let message = client.delete(1).await.expect("delete");
    assert_eq!(message, "Oolong with id 1 deleted!");

    match client.get(1).await {
        Err(ClientError::NotFound(body)) => assert_eq!(body, "Tea not found"),
        other => panic!("expected not found, got {other:?}"),
    }
    assert!(client.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn ids_follow_creation_order_across_deletes() {
    let client = TeaClient::new(&spawn_server().await).expect("client");

    let mut ids = Vec::new();
    for round in 0..6 {
        let tea = client
            .create(&draft("Sencha", round))
            .await
            .expect("create");
        ids.push(tea.id);
        if round % 2 == 0 {
            client.delete(tea.id).await.expect("delete");
        }
    }

    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    let remaining: Vec<u64> = client
        .list()
        .await
        .expect("list")
        .into_iter()
        .map(|tea| tea.id)
        .collect();
    assert_eq!(remaining, vec![2, 4, 6]);
}

#[tokio::test]
async fn servers_do_not_share_state() {
    let first = TeaClient::new(&spawn_server().await).expect("client");
    let second = TeaClient::new(&spawn_server().await).expect("client");

    first.create(&draft("Matcha", 9)).await.expect("create");
    assert!(second.list().await.expect("list").is_empty());
    assert_eq!(
        second.create(&draft("Earl Grey", 4)).await.expect("create").id,
        1
    );
}
