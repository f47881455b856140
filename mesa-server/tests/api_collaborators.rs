//! Menu, tables, staff, inventory, ledger, settings, printers and health

mod common;

use common::TestApp;
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new().await;

    let res = app.get("/health").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["service"], "mesa-server");
    assert_eq!(res.body["version"], env!("CARGO_PKG_VERSION"));

    let res = app.get("/health/detailed").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["database"]["status"], "ok");
}

#[tokio::test]
async fn menu_is_seeded_and_editable() {
    let app = TestApp::new().await;

    let res = app.get("/api/menu").await;
    assert_eq!(res.status, StatusCode::OK);
    let menu = res.body.as_array().unwrap();
    assert_eq!(menu.len(), 4);
    let burger = menu.iter().find(|m| m["id"] == "1").unwrap();
    assert_eq!(burger["name"], "Hambúrguer Clássico");
    assert_eq!(burger["price"], 25.0);

    let res = app
        .post(
            "/api/menu",
            json!({ "name": "Suco de Laranja", "category": "Bebidas", "price": 9.5 }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let id = res.body["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let res = app
        .put(
            &format!("/api/menu/{id}"),
            json!({ "name": "Suco de Laranja", "category": "Bebidas", "price": 11.0 }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["price"], 11.0);

    let res = app.delete(&format!("/api/menu/{id}"), None).await;
    assert_eq!(res.body, json!({ "success": true }));
    assert_eq!(app.get("/api/menu").await.body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn menu_price_changes_reach_new_orders() {
    let app = TestApp::new().await;

    let res = app
        .put(
            "/api/menu/3",
            json!({ "name": "Refrigerante Artesanal", "category": "Bebidas", "price": 9.9 }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app
        .post(
            "/api/orders",
            json!({ "table_number": 1, "items": [{ "id": "3", "quantity": 3 }] }),
        )
        .await;
    assert_eq!(res.body["total"], 29.7);
}

#[tokio::test]
async fn menu_rejects_bad_input() {
    let app = TestApp::new().await;

    let res = app
        .post("/api/menu", json!({ "name": "Free", "price": -1 }))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], 6002);

    let res = app
        .put("/api/menu/missing", json!({ "name": "Ghost", "price": 1 }))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["code"], 6001);
}

#[tokio::test]
async fn tables_crud() {
    let app = TestApp::new().await;

    let res = app.get("/api/tables").await;
    let seats: Vec<i64> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["seats"].as_i64().unwrap())
        .collect();
    assert_eq!(seats, vec![4, 2, 6, 4]);

    let res = app
        .post("/api/tables", json!({ "id": "10", "name": "Varanda", "seats": 8 }))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "id": "10", "name": "Varanda", "seats": 8 }));

    let res = app
        .put("/api/tables", json!({ "id": "10", "name": "Varanda VIP", "seats": 6 }))
        .await;
    assert_eq!(res.body["name"], "Varanda VIP");

    let res = app
        .put("/api/tables", json!({ "id": "99", "name": "Nowhere", "seats": 2 }))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app.delete("/api/tables", Some(json!({ "id": "10" }))).await;
    assert_eq!(res.status, StatusCode::OK);
    let res = app.delete("/api/tables/4", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(app.get("/api/tables").await.body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn staff_login() {
    let app = TestApp::new().await;

    let res = app
        .post(
            "/api/staff",
            json!({ "name": "Ana", "role": "waiter", "pin": "1234" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let id = res.body["id"].as_str().unwrap().to_string();

    let res = app
        .post("/api/staff/login", json!({ "name": "Ana", "pin": "1234" }))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "id": id, "name": "Ana", "role": "waiter" }));

    let res = app
        .post("/api/staff/login", json!({ "name": "Ana", "pin": "0000" }))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["code"], 1002);

    let res = app.post("/api/staff/login", json!({ "name": "Ana" })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app
        .post("/api/staff", json!({ "name": "Rui", "role": "owner", "pin": "1" }))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], 8002);

    let res = app.delete(&format!("/api/staff/{id}"), None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(app.get("/api/staff").await.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn inventory_is_sorted_and_defaults_minimum() {
    let app = TestApp::new().await;

    for name in ["Tomate", "Arroz", "Leite"] {
        let res = app
            .post(
                "/api/inventory",
                json!({ "id": name.to_lowercase(), "name": name, "unit": "kg", "quantity": 5 }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["min_quantity"], 0.0);
    }

    let names: Vec<String> = app
        .get("/api/inventory")
        .await
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Arroz", "Leite", "Tomate"]);

    let res = app
        .put(
            "/api/inventory",
            json!({ "id": "arroz", "name": "Arroz", "unit": "kg", "quantity": 1, "min_quantity": 2 }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["min_quantity"], 2.0);

    let res = app
        .put(
            "/api/inventory",
            json!({ "id": "feijao", "name": "Feijão", "unit": "kg", "quantity": 1 }),
        )
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app.delete("/api/inventory", Some(json!({ "id": "leite" }))).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(app.get("/api/inventory").await.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn ledger_requires_manager() {
    let app = TestApp::new().await;

    let res = app.get("/api/transactions").await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body["code"], 2003);

    let res = app
        .send(
            Method::GET,
            "/api/transactions",
            None,
            &[("x-staff-role", "waiter")],
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let manager = [("x-staff-role", "manager")];
    for (id, date, amount) in [
        ("t1", "2026-10-01T10:00:00.000Z", 120.0),
        ("t2", "2026-10-03T10:00:00.000Z", 80.5),
    ] {
        let res = app
            .send(
                Method::POST,
                "/api/transactions",
                Some(json!({
                    "id": id,
                    "type": "income",
                    "description": "Vendas",
                    "amount": amount,
                    "category": "Vendas",
                    "date": date
                })),
                &manager,
            )
            .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["id"], id);
    }

    let res = app
        .send(
            Method::POST,
            "/api/transactions",
            Some(json!({ "type": "refund", "amount": 10.0 })),
            &manager,
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], 5001);

    let res = app
        .send(Method::GET, "/api/transactions", None, &manager)
        .await;
    let ids: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["t2", "t1"]);
    assert_eq!(res.body[0]["type"], "income");
}

#[tokio::test]
async fn settings_round_trip() {
    let app = TestApp::new().await;

    let res = app.get("/api/settings/restaurantName").await;
    assert_eq!(res.body, json!({ "value": null }));

    let res = app
        .post(
            "/api/config",
            json!({ "restaurantName": "Bistrô", "taxRate": 0.1, "features": { "waiter": true } }),
        )
        .await;
    assert_eq!(res.body, json!({ "success": true }));

    let res = app.get("/api/config").await;
    assert_eq!(res.body["restaurantName"], "Bistrô");
    assert_eq!(res.body["taxRate"], 0.1);
    assert_eq!(res.body["features"]["waiter"], true);

    let res = app
        .post("/api/settings/selectedPrinter", json!({ "value": "HP Deskjet" }))
        .await;
    assert_eq!(res.body, json!({ "key": "selectedPrinter", "value": "HP Deskjet" }));
    let res = app.get("/api/settings/selectedPrinter").await;
    assert_eq!(res.body, json!({ "value": "HP Deskjet" }));
}

#[tokio::test]
async fn legacy_plain_text_settings_are_returned_raw() {
    let app = TestApp::new().await;
    sqlx::query("INSERT INTO settings (key, value) VALUES ('greeting', 'Olá')")
        .execute(&app.state.pool)
        .await
        .unwrap();

    let res = app.get("/api/config").await;
    assert_eq!(res.body["greeting"], "Olá");
}

#[tokio::test]
async fn print_without_printer_is_rejected() {
    let app = TestApp::new().await;

    let res = app.post("/api/print", json!({ "content": "Pedido 1" })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], 9203);
    assert_eq!(res.body["error"], "No printer selected");

    let res = app
        .post("/api/settings/selectedPrinter", json!({ "value": "" }))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let res = app.post("/api/print", json!({})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app.post("/api/print", json!({ "printerName": "\"$" })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], 9203);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = TestApp::new().await;
    let res = app.get("/api/nothing").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
