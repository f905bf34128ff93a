use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use boltshop_commerce::catalog::{AssetRef, Catalog};
use boltshop_db::{Database, Db, Fields, ProductRecord, UserRecord};
use boltshop_server::{app, build_state, router, AppState, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn seeded_db() -> Db {
    Db::in_memory(Database {
        users: vec![UserRecord::new("admin", "admin123").with_field("role", "admin")],
        products: vec![
            ProductRecord::new(1, fields(json!({"name": "Ốc vít", "price": 1500, "stock": 10}))),
            ProductRecord::new(2, fields(json!({"name": "Búa", "price": 120000, "stock": 4}))),
        ],
        ..Default::default()
    })
}

fn sample_catalog() -> Catalog {
    Catalog::from_assets(
        ["ocvit_botuocnovit.png", "ocvit_inox.png", "bua_caosu.png"]
            .into_iter()
            .map(|name| AssetRef::new(format!("assets/{name}"), format!("/assets/{name}"))),
    )
}

fn test_app() -> Router {
    router(AppState::new(seeded_db(), sample_catalog()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_login_success_hides_password() {
    let (status, body) = send(
        test_app(),
        json_request("POST", "/api/login", json!({"username": "admin", "password": "admin123"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["username"], json!("admin"));
    assert_eq!(body["user"]["role"], json!("admin"));
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let (status, body) = send(
        test_app(),
        json_request("POST", "/api/login", json!({"username": "admin", "password": "nope"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"success": false, "message": "Invalid credentials"}));
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (status, _) = send(
        test_app(),
        json_request("POST", "/api/login", json!({"username": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_user_without_password() {
    let mut doc = Database::default();
    doc.users.push(serde_json::from_value(json!({"username": "guest", "role": "viewer"})).unwrap());
    let app = router(AppState::new(Db::in_memory(doc), Catalog::default()));

    let (status, body) = send(
        app,
        json_request("POST", "/api/login", json!({"username": "guest", "password": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_list_products() {
    let (status, body) = send(test_app(), get("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["id"], json!(1));
    assert_eq!(products[1]["name"], json!("Búa"));
}

#[tokio::test]
async fn test_create_product() {
    let app = test_app();
    let (status, body) = send(
        app.clone(),
        json_request("POST", "/api/products", json!({"name": "Kìm", "price": 85000})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(3));
    assert_eq!(body["stock"], json!(0));

    let (_, list) = send(app, get("/api/products")).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_product_requires_name_and_price() {
    let (status, body) = send(
        test_app(),
        json_request("POST", "/api/products", json!({"name": "Kìm"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Name and price are required"}));
}

#[tokio::test]
async fn test_update_product() {
    let app = test_app();
    let (status, body) = send(
        app.clone(),
        json_request("PUT", "/api/products/2", json!({"stock": 40})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(2));
    assert_eq!(body["stock"], json!(40));
    assert_eq!(body["name"], json!("Búa"));

    let (_, list) = send(app, get("/api/products")).await;
    assert_eq!(list[1]["stock"], json!(40));
}

#[tokio::test]
async fn test_update_missing_product() {
    for uri in ["/api/products/99", "/api/products/abc"] {
        let (status, body) = send(test_app(), json_request("PUT", uri, json!({"stock": 1}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"message": "Product not found"}));
    }
}

#[tokio::test]
async fn test_catalog_all() {
    let (status, body) = send(test_app(), get("/api/catalog")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["pagination"]["total"], json!(3));
    assert_eq!(body["pagination"]["total_pages"], json!(1));
}

#[tokio::test]
async fn test_catalog_search_and_category() {
    let (_, body) = send(test_app(), get("/api/catalog?search=oc%20vit&lang=vi")).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], json!("ocvit_inox"));

    let (_, body) = send(test_app(), get("/api/catalog?category=ocvit")).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_catalog_page_clamped() {
    let (status, body) = send(test_app(), get("/api/catalog?page=9&page_size=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], json!(2));
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_catalog_categories() {
    let (status, body) = send(test_app(), get("/api/catalog/categories")).await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["bua", "ocvit"]);
    assert_eq!(body[1]["product_count"], json!(2));
    assert_eq!(body[1]["label"]["vi"], json!("Ốc Vít"));
}

#[tokio::test]
async fn test_catalog_product_detail() {
    let (status, body) = send(test_app(), get("/api/catalog/ocvit_inox")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categoryKey"], json!("ocvit"));
    assert_eq!(body["image"], json!("/assets/ocvit_inox.png"));

    let (status, _) = send(test_app(), get("/api/catalog/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_app_serves_assets_with_cors() {
    let dir = tempfile::tempdir().unwrap();
    let assets = dir.path().join("assets");
    std::fs::create_dir(&assets).unwrap();
    std::fs::write(assets.join("ocvit_inox.png"), b"png").unwrap();
    std::fs::write(assets.join("notes.txt"), b"skip").unwrap();

    let config = ServerConfig {
        db_path: dir.path().join("db.json"),
        assets_dir: Some(assets),
        ..Default::default()
    };
    let app = app(&config, build_state(&config).unwrap());

    let response = app
        .clone()
        .oneshot(get("/assets/ocvit_inox.png"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/api/catalog")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );

    let (_, body) = send(app.clone(), get("/api/catalog")).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["image"], json!("/assets/ocvit_inox.png"));

    // Missing db file reads as empty.
    let (status, body) = send(app, get("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_corrupt_store_rejects_writes() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("db.json");
    let original = r#"{"users": [{"username": "admin"}], "products": [1, 2]}"#;
    std::fs::write(&db_path, original).unwrap();

    let app = router(AppState::new(Db::open(&db_path), Catalog::default()));

    let (status, body) = send(app.clone(), get("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = send(
        app.clone(),
        json_request("POST", "/api/products", json!({"name": "Kìm", "price": 85000})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(app, json_request("PUT", "/api/products/1", json!({"stock": 3}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(std::fs::read_to_string(&db_path).unwrap(), original);
}

#[tokio::test]
async fn test_irregular_store_records_kept_on_create() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("db.json");
    std::fs::write(
        &db_path,
        r#"{"users": [{"username": "admin", "password": "admin123"}, {"role": "viewer"}],
            "products": [{"id": "p1", "name": "Búa"}]}"#,
    )
    .unwrap();
    let app = router(AppState::new(Db::open(&db_path), Catalog::default()));

    let (status, body) = send(
        app.clone(),
        json_request("POST", "/api/login", json!({"username": "admin", "password": "admin123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, body) = send(
        app.clone(),
        json_request("POST", "/api/products", json!({"name": "Kìm", "price": 85000})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(1));

    let (_, list) = send(app, get("/api/products")).await;
    assert_eq!(list, json!([
        {"id": "p1", "name": "Búa"},
        {"id": 1, "name": "Kìm", "price": 85000, "stock": 0}
    ]));

    let stored: Value = serde_json::from_str(&std::fs::read_to_string(&db_path).unwrap()).unwrap();
    assert_eq!(stored["users"].as_array().unwrap().len(), 2);
}
