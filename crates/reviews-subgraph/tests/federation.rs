use reviews_subgraph::StaticReviews;
use serde_json::json;

async fn execute(request: impl Into<async_graphql::Request>) -> serde_json::Value {
    let response = reviews_subgraph::schema(StaticReviews::mock()).execute(request).await;
    serde_json::to_value(response).unwrap()
}

fn entities(representations: serde_json::Value) -> async_graphql::Request {
    let query = r#"
        query($representations: [_Any!]!) {
          _entities(representations: $representations) {
            __typename
            ... on Product {
              id
              reviews {
                id
                author
              }
            }
          }
        }
    "#;

    async_graphql::Request::new(query).variables(async_graphql::Variables::from_json(
        json!({ "representations": representations }),
    ))
}

#[tokio::test]
async fn product_entity_resolution() {
    let response = execute(entities(json!([{ "__typename": "Product", "id": "2" }]))).await;

    insta::assert_json_snapshot!(response, @r###"
    {
      "data": {
        "_entities": [
          {
            "__typename": "Product",
            "id": "2",
            "reviews": [
              {
                "id": "3",
                "author": "Linus"
              }
            ]
          }
        ]
      }
    }
    "###);
}

#[tokio::test]
async fn product_entity_keeps_any_integer_id() {
    let response = execute(entities(json!([
        { "__typename": "Product", "id": "0" },
        { "__typename": "Product", "id": "-17" },
        { "__typename": "Product", "id": "9223372036854775807" }
    ])))
    .await;

    assert_eq!(
        response,
        json!({
            "data": {
                "_entities": [
                    { "__typename": "Product", "id": "0", "reviews": [] },
                    { "__typename": "Product", "id": "-17", "reviews": [] },
                    { "__typename": "Product", "id": "9223372036854775807", "reviews": [] }
                ]
            }
        })
    );
}

#[tokio::test]
async fn product_entities_resolve_in_order() {
    let response = execute(entities(json!([
        { "__typename": "Product", "id": "3" },
        { "__typename": "Product", "id": "1" }
    ])))
    .await;

    let ids: Vec<_> = response["data"]["_entities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entity| entity["id"].clone())
        .collect();

    assert_eq!(ids, [json!("3"), json!("1")]);
}

#[tokio::test]
async fn service_sdl() {
    let response = execute("{ _service { sdl } }").await;
    let sdl = response["data"]["_service"]["sdl"].as_str().unwrap();

    assert!(sdl.contains("type Product"), "{sdl}");
    assert!(sdl.contains(r#"@key(fields: "id")"#), "{sdl}");
    assert!(sdl.contains("type Review"), "{sdl}");
}

#[tokio::test]
async fn product_key_is_nullable_but_set_on_entities() {
    let sdl = reviews_subgraph::schema(StaticReviews::mock()).sdl();
    assert!(sdl.contains("id: ID\n"), "{sdl}");

    let response = execute(r#"{ _entities(representations: [{ __typename: "Product", id: "5" }]) { ... on Product { id } } }"#).await;

    assert_eq!(response["data"]["_entities"][0]["id"], "5");
}
