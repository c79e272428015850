use super::*;
use crate::error::PlannerError;
use crate::models::{
    BudgetGroupId, BudgetGroupInput, CategoryAssignment, CategoryId, CategoryInput, Money,
    TransactionFilter, TransactionId, TransactionInput, TransactionKind, WalletId, WalletInput,
    WalletType,
};
use axum::{
    body::Bytes,
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Recorded {
    bodies: Arc<Mutex<Vec<Value>>>,
    auth: Arc<Mutex<Vec<String>>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

const CATEGORY_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
const GROUP_ID: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
const WALLET_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
const TRANSACTION_ID: &str = "9b2e8f3c-1d4a-4c6e-8f0b-2a7d5e9c1b34";

/// (method, path, JSON body) of every request the echo backend saw
#[derive(Clone, Default)]
struct Calls(Arc<Mutex<Vec<(String, String, Value)>>>);

impl Calls {
    fn last(&self) -> (String, String, Value) {
        self.0.lock().unwrap().last().cloned().unwrap()
    }
}

/// Backend that records every request and answers with the request body plus
/// an id taken from the path
fn echo_backend(calls: Calls) -> Router {
    Router::new()
        .fallback(
            |State(calls): State<Calls>, method: Method, uri: Uri, body: Bytes| async move {
                let body: Value = if body.is_empty() {
                    Value::Null
                } else {
                    serde_json::from_slice(&body).unwrap()
                };
                let path = uri.path().to_string();
                calls
                    .0
                    .lock()
                    .unwrap()
                    .push((method.to_string(), path.clone(), body.clone()));

                if method == Method::DELETE {
                    return StatusCode::NO_CONTENT.into_response();
                }

                let last = path.rsplit('/').next().unwrap_or_default();
                let id = if uuid::Uuid::parse_str(last).is_ok() {
                    last.to_string()
                } else {
                    TRANSACTION_ID.to_string()
                };
                let mut record = if method == Method::GET {
                    json!({
                        "description": "Aluguel",
                        "amount": 1500.0,
                        "date": "2025-03-01",
                        "type": "expense"
                    })
                } else {
                    body
                };
                record["id"] = json!(id);
                Json(record).into_response()
            },
        )
        .with_state(calls)
}

async fn echo_client() -> (ApiClient, Calls) {
    let calls = Calls::default();
    let base = spawn_backend(echo_backend(calls.clone())).await;
    (ApiClient::new(&base, None).unwrap(), calls)
}

async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

fn backend(recorded: Recorded) -> Router {
    let api = Router::new()
        .route(
            "/categories",
            get(|State(r): State<Recorded>, headers: HeaderMap| async move {
                if let Some(auth) = headers.get("authorization") {
                    r.auth.lock().unwrap().push(auth.to_str().unwrap().to_string());
                }
                Json(json!([{
                    "id": CATEGORY_ID,
                    "name": "Mercado",
                    "description": "",
                    "color": "#22c55e",
                    "icon": "cart",
                    "groupId": GROUP_ID
                }]))
            })
            .post(|State(r): State<Recorded>, Json(body): Json<Value>| async move {
                r.bodies.lock().unwrap().push(body.clone());
                Json(json!({
                    "id": CATEGORY_ID,
                    "name": body["name"],
                    "description": body["description"],
                    "color": body["color"],
                    "icon": body["icon"]
                }))
            }),
        )
        .route(
            "/wallets/:id",
            axum::routing::delete(|Path(id): Path<String>| async move {
                if id == CATEGORY_ID {
                    (StatusCode::NO_CONTENT, String::new())
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        json!({"message": "wallet not found"}).to_string(),
                    )
                }
            }),
        )
        .route(
            "/budget-groups/category-assignments",
            put(|State(r): State<Recorded>, Json(body): Json<Value>| async move {
                r.bodies.lock().unwrap().push(body);
                StatusCode::NO_CONTENT
            }),
        )
        .route(
            "/transactions",
            get(
                |State(r): State<Recorded>, Query(q): Query<HashMap<String, String>>| async move {
                    r.queries.lock().unwrap().push(q);
                    Json(json!([]))
                },
            ),
        )
        .route(
            "/transactions/batch",
            post(|State(r): State<Recorded>, Json(body): Json<Value>| async move {
                r.bodies.lock().unwrap().push(body.clone());
                let created: Vec<Value> = body["transactions"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|t| {
                        let mut t = t.clone();
                        t["id"] = json!(uuid::Uuid::new_v4().to_string());
                        t
                    })
                    .collect();
                Json(Value::Array(created))
            }),
        )
        .route(
            "/transactions/import",
            post(|mut multipart: Multipart| async move {
                let mut names = Vec::new();
                while let Some(field) = multipart.next_field().await.unwrap() {
                    let field_name = field.name().unwrap_or_default().to_string();
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.unwrap();
                    names.push((field_name, file_name, bytes.len()));
                }
                assert_eq!(names.len(), 1);
                assert_eq!(names[0].0, "file");
                Json(json!([{
                    "description": names[0].1,
                    "amount": names[0].2 as f64,
                    "date": "2025-01-10",
                    "type": "expense"
                }]))
            }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .with_state(recorded);

    Router::new().nest("/api", api)
}

fn input(amount: Money) -> TransactionInput {
    TransactionInput {
        description: "Mercado".into(),
        amount,
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        kind: TransactionKind::Expense,
        category_id: None,
        wallet_id: None,
    }
}

#[tokio::test]
async fn test_list_categories_sends_bearer_token() {
    let recorded = Recorded::default();
    let base = spawn_backend(backend(recorded.clone())).await;
    let client = ApiClient::new(&base, Some("secret".into())).unwrap();

    let categories = client.list_categories().await.unwrap();

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Mercado");
    assert!(categories[0].is_assigned());
    assert_eq!(recorded.auth.lock().unwrap().as_slice(), ["Bearer secret"]);
}

#[tokio::test]
async fn test_create_category_posts_body() {
    let recorded = Recorded::default();
    let base = spawn_backend(backend(recorded.clone())).await;
    let client = ApiClient::new(&base, None).unwrap();

    let created = client
        .create_category(&CategoryInput::new("Lazer"))
        .await
        .unwrap();

    assert_eq!(created.name, "Lazer");
    assert_eq!(recorded.bodies.lock().unwrap()[0]["name"], "Lazer");
}

#[tokio::test]
async fn test_invalid_category_is_not_sent() {
    let recorded = Recorded::default();
    let base = spawn_backend(backend(recorded.clone())).await;
    let client = ApiClient::new(&base, None).unwrap();

    let err = client
        .create_category(&CategoryInput::new(""))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(recorded.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_error_status_carries_backend_message() {
    let base = spawn_backend(backend(Recorded::default())).await;
    let client = ApiClient::new(&base, None).unwrap();

    let missing = crate::models::WalletId::parse(GROUP_ID).unwrap();
    let err = client.delete_wallet(missing).await.unwrap_err();
    match err {
        PlannerError::ApiStatus { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "wallet not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let present = crate::models::WalletId::parse(CATEGORY_ID).unwrap();
    client.delete_wallet(present).await.unwrap();
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let base = spawn_backend(backend(Recorded::default())).await;
    let client = ApiClient::new(&base, None).unwrap();

    let err = client.get_json::<Value>("broken").await.unwrap_err();
    assert!(matches!(
        err,
        PlannerError::ApiStatus { status: 500, ref message } if message == "boom"
    ));
}

#[tokio::test]
async fn test_category_assignments_body() {
    let recorded = Recorded::default();
    let base = spawn_backend(backend(recorded.clone())).await;
    let client = ApiClient::new(&base, None).unwrap();

    let category = CategoryId::parse(CATEGORY_ID).unwrap();
    let group = BudgetGroupId::parse(GROUP_ID).unwrap();
    client
        .update_category_assignments(&[
            CategoryAssignment::assign(category, group),
            CategoryAssignment::unassign(category),
        ])
        .await
        .unwrap();

    let bodies = recorded.bodies.lock().unwrap();
    let assignments = bodies[0]["assignments"].as_array().unwrap();
    assert_eq!(assignments[0]["budgetGroupId"], GROUP_ID);
    assert!(assignments[1]["budgetGroupId"].is_null());
}

#[tokio::test]
async fn test_list_transactions_query() {
    let recorded = Recorded::default();
    let base = spawn_backend(backend(recorded.clone())).await;
    let client = ApiClient::new(&base, None).unwrap();

    let category = CategoryId::parse(CATEGORY_ID).unwrap();
    let filter = TransactionFilter::for_year(2025).with_category(category);
    let transactions = client.list_transactions(&filter).await.unwrap();

    assert!(transactions.is_empty());
    let queries = recorded.queries.lock().unwrap();
    assert_eq!(queries[0]["startDate"], "2025-01-01");
    assert_eq!(queries[0]["endDate"], "2025-12-31");
    assert_eq!(queries[0]["categoryId"], CATEGORY_ID);
}

#[tokio::test]
async fn test_batch_create() {
    let recorded = Recorded::default();
    let base = spawn_backend(backend(recorded.clone())).await;
    let client = ApiClient::new(&base, None).unwrap();

    let created = client
        .create_transactions(&[input(Money::from_cents(1050)), input(Money::from_units(2))])
        .await
        .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].amount, Money::from_cents(1050));
    assert_eq!(recorded.bodies.lock().unwrap()[0]["transactions"][0]["amount"], 10.5);
}

#[tokio::test]
async fn test_batch_rejects_non_positive_amounts() {
    let recorded = Recorded::default();
    let base = spawn_backend(backend(recorded.clone())).await;
    let client = ApiClient::new(&base, None).unwrap();

    let err = client
        .create_transactions(&[input(Money::zero())])
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(recorded.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_import_file_uploads_single_part() {
    let base = spawn_backend(backend(Recorded::default())).await;
    let client = ApiClient::new(&base, None).unwrap();

    let parsed = client
        .import_file("extrato.ofx", b"OFXHEADER".to_vec())
        .await
        .unwrap();

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].description, "extrato.ofx");
    assert_eq!(parsed[0].amount, Money::from_units(9));
}

#[tokio::test]
async fn test_connection_failure_is_api_error() {
    let client = ApiClient::new("http://127.0.0.1:9/api", None).unwrap();
    let err = client.list_wallets().await.unwrap_err();
    assert!(matches!(err, PlannerError::Api(_)));
}

#[tokio::test]
async fn test_update_category_puts_full_id() {
    let (client, calls) = echo_client().await;
    let id = CategoryId::parse(CATEGORY_ID).unwrap();

    let mut input = CategoryInput::new("Feira");
    input.color = "#eab308".into();
    let updated = client.update_category(id, &input).await.unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Feira");
    let (method, path, body) = calls.last();
    assert_eq!(method, "PUT");
    assert_eq!(path, format!("/api/categories/{}", CATEGORY_ID));
    assert_eq!(body["name"], "Feira");
    assert_eq!(body["color"], "#eab308");
}

#[tokio::test]
async fn test_invalid_category_update_is_not_sent() {
    let (client, calls) = echo_client().await;
    let id = CategoryId::parse(CATEGORY_ID).unwrap();

    let err = client
        .update_category(id, &CategoryInput::new(""))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(calls.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_wallet() {
    let (client, calls) = echo_client().await;
    let id = WalletId::parse(WALLET_ID).unwrap();
    let input = WalletInput {
        name: "Poupança".into(),
        balance: Money::from_cents(250075),
        wallet_type: WalletType::Savings,
        bank_id: None,
    };

    let updated = client.update_wallet(id, &input).await.unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.balance, Money::from_cents(250075));
    let (method, path, body) = calls.last();
    assert_eq!(method, "PUT");
    assert_eq!(path, format!("/api/wallets/{}", WALLET_ID));
    assert_eq!(body["balance"], 2500.75);
    assert_eq!(body["type"], "savings");
    assert!(body.get("bankId").is_none());
}

#[tokio::test]
async fn test_update_budget_group() {
    let (client, calls) = echo_client().await;
    let id = BudgetGroupId::parse(GROUP_ID).unwrap();
    let input = BudgetGroupInput {
        name: "Lazer".into(),
        color: "#3b82f6".into(),
    };

    let updated = client.update_budget_group(id, &input).await.unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Lazer");
    let (method, path, body) = calls.last();
    assert_eq!(method, "PUT");
    assert_eq!(path, format!("/api/budget-groups/{}", GROUP_ID));
    assert_eq!(body, json!({"name": "Lazer", "color": "#3b82f6"}));
}

#[tokio::test]
async fn test_create_transaction() {
    let (client, calls) = echo_client().await;
    let mut body = input(Money::from_cents(4990));
    body.category_id = Some(CategoryId::parse(CATEGORY_ID).unwrap());

    let created = client.create_transaction(&body).await.unwrap();

    assert_eq!(created.id, TransactionId::parse(TRANSACTION_ID).unwrap());
    assert_eq!(created.amount, Money::from_cents(4990));
    let (method, path, sent) = calls.last();
    assert_eq!(method, "POST");
    assert_eq!(path, "/api/transactions");
    assert_eq!(sent["amount"], 49.9);
    assert_eq!(sent["date"], "2025-01-01");
    assert_eq!(sent["type"], "expense");
    assert_eq!(sent["categoryId"], CATEGORY_ID);
}

#[tokio::test]
async fn test_get_update_delete_transaction() {
    let (client, calls) = echo_client().await;
    let id = TransactionId::parse(TRANSACTION_ID).unwrap();

    let fetched = client.get_transaction(id).await.unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.description, "Aluguel");
    assert_eq!(fetched.amount, Money::from_units(1500));
    let (method, path, _) = calls.last();
    assert_eq!(method, "GET");
    assert_eq!(path, format!("/api/transactions/{}", TRANSACTION_ID));

    let mut change = input(Money::from_units(1600));
    change.kind = TransactionKind::Income;
    let updated = client.update_transaction(id, &change).await.unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.kind, TransactionKind::Income);
    let (method, path, body) = calls.last();
    assert_eq!(method, "PUT");
    assert_eq!(path, format!("/api/transactions/{}", TRANSACTION_ID));
    assert_eq!(body["amount"], 1600.0);
    assert_eq!(body["type"], "income");

    client.delete_transaction(id).await.unwrap();
    let (method, path, body) = calls.last();
    assert_eq!(method, "DELETE");
    assert_eq!(path, format!("/api/transactions/{}", TRANSACTION_ID));
    assert!(body.is_null());
    assert_eq!(calls.0.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_invalid_transaction_update_is_not_sent() {
    let (client, calls) = echo_client().await;
    let id = TransactionId::parse(TRANSACTION_ID).unwrap();

    let err = client
        .update_transaction(id, &input(Money::zero()))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(calls.0.lock().unwrap().is_empty());
}
