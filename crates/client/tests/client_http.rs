use chrono::NaiveDate;
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use serde_json::json;
use walletwise_client::{ClientError, TransactionListView, WalletwiseClient};
use walletwise_core::finance::{
    CreateRecurringRequest, CreateTransactionRequest, CreateWalletRequest, TransactionKind,
    UpdateTransactionRequest,
};
use walletwise_core::recurrence::{Frequency, MonthlyMode, RecurrenceRule};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn transaction_json(id: i64, amount: f64, kind: &str, on: &str) -> serde_json::Value {
    json!({
        "id": id,
        "wallet_id": 1,
        "category_id": 2,
        "amount": amount,
        "kind": kind,
        "note": null,
        "date": on
    })
}

#[tokio::test]
async fn test_list_transactions_sends_page_and_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/transactions")
                .query_param("page", "1")
                .query_param("limit", "2");
            then.status(200).json_body(json!({
                "items": [
                    transaction_json(3, 10.0, "expense", "2024-03-12"),
                    transaction_json(4, 99.5, "income", "2024-03-11T08:00:00Z")
                ],
                "total_pages": 3
            }));
        })
        .await;

    let client = WalletwiseClient::new(server.base_url()).with_page_size(2);
    let page = client.list_transactions(1).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].signed_amount(), -10.0);
    assert_eq!(page.items[1].date, date(2024, 3, 11));
}

#[tokio::test]
async fn test_transaction_view_fetches_each_page_once() {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/transactions")
                .query_param("page", "0");
            then.status(200).json_body(json!({
                "items": [transaction_json(1, 5.0, "expense", "2024-03-12")],
                "total_pages": 2
            }));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/transactions")
                .query_param("page", "1");
            then.status(200).json_body(json!({
                "items": [transaction_json(2, 7.0, "income", "2024-03-10")],
                "total_pages": 2
            }));
        })
        .await;

    let client = WalletwiseClient::new(server.base_url());
    let mut view = TransactionListView::new(client);

    for key in [0, 1, 0, 1, 0] {
        view.load_page(key).await.unwrap();
    }

    first.assert_hits_async(1).await;
    second.assert_hits_async(1).await;
    assert_eq!(view.cached_pages(), vec![0, 1]);
    assert_eq!(view.total_pages(), Some(2));
}

#[tokio::test]
async fn test_transaction_view_does_not_cache_server_errors() {
    let server = MockServer::start_async().await;
    let failing = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/transactions");
            then.status(500).body("database unavailable");
        })
        .await;

    let mut view = TransactionListView::new(WalletwiseClient::new(server.base_url()));

    let err = view.load_page(0).await.unwrap_err();
    match err {
        ClientError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(view.cached_pages().is_empty());

    let _ = view.load_page(0).await;
    failing.assert_hits_async(2).await;
}

#[tokio::test]
async fn test_get_transaction_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/transactions/42");
            then.status(404);
        })
        .await;

    let client = WalletwiseClient::new(server.base_url());
    let err = client.get_transaction(42).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::NotFound { ref resource } if resource == "transaction 42"
    ));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/wallets");
            then.status(200).json_body(json!([{ "id": 1, "name": "Cash" }]));
        })
        .await;

    let client = WalletwiseClient::new(server.base_url());
    let err = client.list_wallets().await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_create_transaction_posts_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/transactions")
                .json_body(json!({
                    "wallet_id": 1,
                    "amount": 12.5,
                    "kind": "expense",
                    "date": "2024-03-12",
                    "note": "Lunch"
                }));
            then.status(201)
                .json_body(transaction_json(9, 12.5, "expense", "2024-03-12"));
        })
        .await;

    let client = WalletwiseClient::new(server.base_url());
    let req = CreateTransactionRequest::new(1, 12.5, TransactionKind::Expense, date(2024, 3, 12))
        .with_note("Lunch");
    let tx = client.create_transaction(&req).await.unwrap();

    mock.assert_async().await;
    assert_eq!(tx.id, 9);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_server() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200);
        })
        .await;
    let client = WalletwiseClient::new(server.base_url());

    let negative =
        CreateTransactionRequest::new(1, -1.0, TransactionKind::Expense, date(2024, 3, 12));
    let empty_update = UpdateTransactionRequest::default();
    let unnamed_wallet = CreateWalletRequest::new("  ", "EUR");
    let rule = RecurrenceRule::new(Frequency::Weekly, 1, date(2024, 3, 12)).unwrap();
    let negative_recurring =
        CreateRecurringRequest::new(1, -20.0, TransactionKind::Expense, rule);
    let infinite = CreateTransactionRequest::new(
        1,
        f64::INFINITY,
        TransactionKind::Income,
        date(2024, 3, 12),
    );

    assert!(matches!(
        client.create_transaction(&negative).await,
        Err(ClientError::InvalidInput(_))
    ));
    assert!(matches!(
        client.update_transaction(1, &empty_update).await,
        Err(ClientError::InvalidInput(_))
    ));
    assert!(matches!(
        client.create_wallet(&unnamed_wallet).await,
        Err(ClientError::InvalidInput(_))
    ));
    assert!(matches!(
        client.create_recurring(&negative_recurring).await,
        Err(ClientError::InvalidInput(_))
    ));
    assert!(matches!(
        client.create_transaction(&infinite).await,
        Err(ClientError::InvalidInput(_))
    ));
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_delete_transaction() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/transactions/5");
            then.status(204);
        })
        .await;

    let client = WalletwiseClient::new(server.base_url());
    client.delete_transaction(5).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_pay_bill() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PATCH).path("/api/bills/3/pay");
            then.status(200).json_body(json!({
                "id": 3,
                "name": "Internet",
                "amount": "39.90",
                "due_date": "2024-03-20",
                "paid": true
            }));
        })
        .await;

    let client = WalletwiseClient::new(server.base_url());
    let bill = client.pay_bill(3).await.unwrap();

    assert!(bill.paid);
    assert_eq!(bill.amount, 39.90);
}

#[tokio::test]
async fn test_list_recurring_describes_schedule() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/recurring-transactions");
            then.status(200).json_body(json!([{
                "id": 1,
                "wallet_id": 1,
                "amount": 800,
                "kind": "expense",
                "note": "Rent",
                "rule": {
                    "frequency": "monthly",
                    "interval": 1,
                    "start_date": "2024-03-12",
                    "monthly_mode": "nth_weekday",
                    "end": { "type": "never" }
                }
            }]));
        })
        .await;

    let client = WalletwiseClient::new(server.base_url());
    let recurring = client.list_recurring().await.unwrap();

    assert_eq!(recurring.len(), 1);
    assert_eq!(recurring[0].schedule(), "Every month on the 2nd Tuesday");
}

#[tokio::test]
async fn test_create_recurring_sends_rule() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/recurring-transactions")
                .json_body_partial(
                    r#"{"rule":{"frequency":"monthly","interval":2,"monthly_mode":"nth_weekday"}}"#,
                );
            then.status(201).json_body(json!({
                "id": 8,
                "wallet_id": 1,
                "amount": 50,
                "kind": "expense",
                "rule": {
                    "frequency": "monthly",
                    "interval": 2,
                    "start_date": "2024-03-12",
                    "monthly_mode": "nth_weekday"
                }
            }));
        })
        .await;

    let rule = RecurrenceRule::new(Frequency::Monthly, 2, date(2024, 3, 12))
        .unwrap()
        .with_monthly_mode(MonthlyMode::NthWeekday);
    let req = CreateRecurringRequest::new(1, 50.0, TransactionKind::Expense, rule);

    let client = WalletwiseClient::new(server.base_url());
    let created = client.create_recurring(&req).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, 8);
    assert_eq!(created.schedule(), "Every 2 months on the 2nd Tuesday");
}
