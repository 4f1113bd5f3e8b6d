//! Order submission and handling over HTTP

mod common;

use axum::Router;
use common::{Cookies, add_object, admin_session, app, pair_device, post_json};
use http::StatusCode;
use serde_json::{Value, json};

struct Shop {
    app: Router,
    admin: String,
    kiosk: String,
    orders: String,
    burger: String,
}

async fn shop() -> Shop {
    let app = app().await;
    let admin = admin_session(&app).await;
    let burger = add_object(
        &app,
        &admin,
        json!({ "type": "Item", "name": "Burger", "price": 7.89 }),
    )
    .await;
    let kiosk = pair_device(&app, &admin, "kiosk").await;
    let orders = pair_device(&app, &admin, "orders").await;
    Shop {
        app,
        admin,
        kiosk,
        orders,
        burger,
    }
}

fn order(item: &str, name: &str) -> Value {
    json!({
        "name": name,
        "phone": "555-0100",
        "notes": "",
        "parts": [{ "partID": 1, "itemID": item, "quantity": 1, "addonIDs": [] }]
    })
}

async fn submit(shop: &Shop, order: Value) -> String {
    let response = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "add", "order": order }),
        &Cookies::device(&shop.kiosk),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    response.json["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_kiosk_submits_and_orders_screen_closes_out() {
    let shop = shop().await;
    let first = submit(&shop, order(&shop.burger, "Sam")).await;
    let second = submit(&shop, order(&shop.burger, "Alex")).await;

    let open = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "get" }),
        &Cookies::device(&shop.orders),
    )
    .await;
    assert_eq!(open.status, StatusCode::OK);
    let list = open.json["orders"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["_id"], first.as_str());
    assert_eq!(list[0]["finished"], false);
    assert!(list[0]["timestamp"].as_i64().unwrap() > 0);

    let closed = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "closeout", "id": first }),
        &Cookies::device(&shop.orders),
    )
    .await;
    assert_eq!(closed.json["message"], format!("Closed out order {first}"));

    let open = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "get" }),
        &Cookies::device(&shop.orders),
    )
    .await;
    let ids: Vec<_> = open.json["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec![second]);

    let all = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "getall" }),
        &Cookies::admin(&shop.admin),
    )
    .await;
    let all = all.json["orders"].as_array().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["finished"], true);
}

#[tokio::test]
async fn test_client_timestamp_and_finished_ignored() {
    let shop = shop().await;
    let mut body = order(&shop.burger, "Sam");
    body["timestamp"] = json!(5);
    body["finished"] = json!(true);
    submit(&shop, body).await;

    let open = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "get" }),
        &Cookies::admin(&shop.admin),
    )
    .await;
    let list = open.json["orders"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_ne!(list[0]["timestamp"], 5);
}

#[tokio::test]
async fn test_device_roles() {
    let shop = shop().await;

    let from_orders_screen = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "add", "order": order(&shop.burger, "Sam") }),
        &Cookies::device(&shop.orders),
    )
    .await;
    assert_eq!(from_orders_screen.status, StatusCode::UNAUTHORIZED);

    let from_kiosk = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "get" }),
        &Cookies::device(&shop.kiosk),
    )
    .await;
    assert_eq!(from_kiosk.status, StatusCode::UNAUTHORIZED);

    let anonymous = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "add", "order": order(&shop.burger, "Sam") }),
        &Cookies::none(),
    )
    .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let id = submit(&shop, order(&shop.burger, "Sam")).await;
    let remove = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "remove", "id": id }),
        &Cookies::device(&shop.orders),
    )
    .await;
    assert_eq!(remove.status, StatusCode::UNAUTHORIZED);

    let getall = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "getall" }),
        &Cookies::device(&shop.orders),
    )
    .await;
    assert_eq!(getall.status, StatusCode::UNAUTHORIZED);

    let remove = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "remove", "id": id }),
        &Cookies::admin(&shop.admin),
    )
    .await;
    assert_eq!(remove.json["message"], "Removed 1 order(s)");
}

#[tokio::test]
async fn test_invalid_orders_rejected() {
    let shop = shop().await;

    let mut empty = order(&shop.burger, "Sam");
    empty["parts"] = json!([]);
    let mut zero = order(&shop.burger, "Sam");
    zero["parts"][0]["quantity"] = json!(0);
    let mut duplicate = order(&shop.burger, "Sam");
    duplicate["parts"] = json!([
        { "partID": 1, "itemID": shop.burger, "quantity": 1 },
        { "partID": 1, "itemID": shop.burger, "quantity": 2 }
    ]);
    let mut huge = order(&shop.burger, "Sam");
    huge["parts"][0]["quantity"] = json!(4_000_000_000_u32);
    let long_name = order(&shop.burger, &"x".repeat(201));

    for (body, message) in [
        (empty, Some("Order has no parts")),
        (zero, Some("Quantity must be at least 1")),
        (huge, Some("Quantity must be between 1 and 1000")),
        (duplicate, Some("Order parts must have unique part ids")),
        (long_name, None),
    ] {
        let response = post_json(
            &shop.app,
            "/api/order",
            json!({ "intent": "add", "order": body }),
            &Cookies::device(&shop.kiosk),
        )
        .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", response.text);
        if let Some(message) = message {
            assert_eq!(response.json["message"], message);
        }
    }

    let all = post_json(
        &shop.app,
        "/api/order",
        json!({ "intent": "getall" }),
        &Cookies::admin(&shop.admin),
    )
    .await;
    assert!(all.json["orders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_order() {
    let shop = shop().await;
    for intent in ["closeout", "remove"] {
        let response = post_json(
            &shop.app,
            "/api/order",
            json!({ "intent": intent, "id": "missing" }),
            &Cookies::admin(&shop.admin),
        )
        .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.json["message"], "Order not found");
    }
}
