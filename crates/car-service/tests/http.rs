use serde_json::json;
use subgraph_server::TestServer;

async fn post(server: &TestServer, query: &str) -> serde_json::Value {
    reqwest::Client::new()
        .post(server.url())
        .json(&json!({ "query": query }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn ping_over_http() {
    let server = TestServer::start(car_service::schema()).await.unwrap();

    let response = post(&server, "{ ping }").await;

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": {
        "ping": "pong - car service is running!"
      }
    }
    "###);
}

#[tokio::test]
async fn cars_over_http() {
    let server = TestServer::start(car_service::schema()).await.unwrap();

    let response = post(&server, "{ cars(limit: 1) { vin isElectric } }").await;

    assert_eq!(
        response,
        json!({ "data": { "cars": [{ "vin": "VIN001", "isElectric": true }] } })
    );
}

#[tokio::test]
async fn parallel_requests_are_independent() {
    let server = TestServer::start(car_service::schema()).await.unwrap();

    let requests = (0..8).map(|i| {
        let vin = format!("VIN-{i}");
        let server = &server;

        async move {
            let response = post(server, &format!(r#"{{ car(vin: "{vin}") {{ vin }} }}"#)).await;
            (vin, response)
        }
    });

    for (vin, response) in futures::future::join_all(requests).await {
        assert_eq!(response["data"]["car"]["vin"], json!(vin));
    }
}
