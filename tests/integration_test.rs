use chrono::Utc;
use order_system::model::{Customer, Order, OrderLine, OrderNumber, StockItem};
use order_system::store::{
    AvailabilityProbe, JsonFileStore, OrderStore, SqliteStore, StoreConfig, StoreError,
};
use order_system::store::{create_store, StoreBackend};
use rust_decimal::Decimal;
use sqlx::{Connection, Row};

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// The canonical scenario: a laptop (electronic) and two headphones.
/// Subtotal 1500.00, tax 150.00, tariff 60.00, total 1710.00.
fn john_doe_order() -> Order {
    let number = OrderNumber(1);
    let mut order = Order::new(
        number,
        Utc::now(),
        Customer::new("John Doe", "123-456-7890"),
    );
    order.add_line(OrderLine::new(
        number,
        1,
        StockItem::new("ELECT001", "Laptop", money(120_000)),
        1,
        true,
    ));
    order.add_line(OrderLine::new(
        number,
        2,
        StockItem::new("S1002", "Headphones", money(15_000)),
        2,
        false,
    ));
    order.calculate_totals();
    order
}

#[test]
fn canonical_scenario_amounts() {
    let order = john_doe_order();

    assert_eq!(order.subtotal(), money(150_000));
    assert_eq!(order.tax_amount, money(15_000));
    assert_eq!(order.tariff_amount, money(6_000));
    assert_eq!(order.total_amount, money(171_000));
}

/// The persisted document must carry the stable field names and survive a
/// round trip unchanged.
#[tokio::test]
async fn json_document_uses_stable_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let order = john_doe_order();

    store.write(&order).await.unwrap();

    let contents = std::fs::read_to_string(dir.path().join("Order_1.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(doc["OrderNumber"], 1);
    assert_eq!(doc["Customer"]["Name"], "John Doe");
    assert_eq!(doc["Customer"]["Phone"], "123-456-7890");
    assert_eq!(doc["TaxAmount"], "150.00");
    assert_eq!(doc["TariffAmount"], "60.00");
    assert_eq!(doc["TotalAmount"], "1710.00");

    let details = doc["OrderDetails"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["DetailNumber"], 1);
    assert_eq!(details[0]["Quantity"], 1);
    assert_eq!(details[0]["StockItem"]["StockID"], "ELECT001");
    assert_eq!(details[0]["StockItem"]["Name"], "Laptop");
    assert_eq!(details[0]["StockItem"]["Price"], "1200.00");
    assert_eq!(details[1]["StockItem"]["StockID"], "S1002");

    let round_trip: Order = serde_json::from_str(&contents).unwrap();
    assert_eq!(round_trip, order);
}

/// Header and detail rows land in one transaction; amounts are stored as
/// exact decimal strings.
#[tokio::test]
async fn sqlite_write_persists_header_and_details() {
    let dir = tempfile::tempdir().unwrap();
    let connection_string = format!("sqlite:{}", dir.path().join("orders.db").display());
    let store = SqliteStore::new(&connection_string);
    let order = john_doe_order();

    store.write(&order).await.unwrap();

    let mut conn = sqlx::sqlite::SqliteConnection::connect(&connection_string)
        .await
        .unwrap();

    let header = sqlx::query("SELECT * FROM Orders")
        .fetch_one(&mut conn)
        .await
        .unwrap();
    assert_eq!(header.get::<i64, _>("OrderNumber"), 1);
    assert_eq!(header.get::<String, _>("CustomerName"), "John Doe");
    assert_eq!(header.get::<String, _>("CustomerPhone"), "123-456-7890");
    assert_eq!(header.get::<String, _>("TaxAmount"), "150.00");
    assert_eq!(header.get::<String, _>("TariffAmount"), "60.00");
    assert_eq!(header.get::<String, _>("TotalAmount"), "1710.00");

    let details = sqlx::query("SELECT * FROM OrderDetails ORDER BY DetailNumber")
        .fetch_all(&mut conn)
        .await
        .unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0].get::<String, _>("StockID"), "ELECT001");
    assert_eq!(details[0].get::<String, _>("StockPrice"), "1200.00");
    assert_eq!(details[0].get::<i64, _>("Quantity"), 1);
    assert_eq!(details[1].get::<String, _>("StockID"), "S1002");
    assert_eq!(details[1].get::<i64, _>("Quantity"), 2);
}

/// A line without a stock identifier is skipped with a diagnostic; the rest
/// of the order still commits.
#[tokio::test]
async fn sqlite_write_skips_lines_without_stock_items() {
    let dir = tempfile::tempdir().unwrap();
    let connection_string = format!("sqlite:{}", dir.path().join("orders.db").display());
    let store = SqliteStore::new(&connection_string);

    let mut order = john_doe_order();
    order.add_line(OrderLine::new(
        order.order_number,
        3,
        StockItem::new("", "Unlabeled", money(999)),
        1,
        false,
    ));
    order.calculate_totals();

    store.write(&order).await.unwrap();

    let mut conn = sqlx::sqlite::SqliteConnection::connect(&connection_string)
        .await
        .unwrap();
    let headers: i64 = sqlx::query("SELECT COUNT(*) FROM Orders")
        .fetch_one(&mut conn)
        .await
        .unwrap()
        .get(0);
    let details: i64 = sqlx::query("SELECT COUNT(*) FROM OrderDetails")
        .fetch_one(&mut conn)
        .await
        .unwrap()
        .get(0);
    assert_eq!(headers, 1);
    assert_eq!(details, 2, "the unlabeled line must be skipped");
}

/// A SQLite store doubles as its own availability probe.
#[tokio::test]
async fn sqlite_store_probes_its_own_availability() {
    let dir = tempfile::tempdir().unwrap();

    let reachable = SqliteStore::new(format!("sqlite:{}", dir.path().join("ok.db").display()));
    assert!(reachable.is_available().await);
    assert!(reachable.is_database_available().await);

    let unreachable = SqliteStore::new(format!(
        "sqlite:{}",
        dir.path().join("missing/nested/ok.db").display()
    ));
    assert!(!unreachable.is_available().await);
}

/// Factory output actually writes through the capability seam.
#[tokio::test]
async fn selected_backend_writes_through_the_capability() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        connection_string: String::new(),
        output_dir: dir.path().to_path_buf(),
    };

    let backend = create_store(false, &config).unwrap();
    assert!(matches!(backend, StoreBackend::Json(_)));
    assert!(backend.is_available().await);

    backend.write(&john_doe_order()).await.unwrap();
    assert!(dir.path().join("Order_1.json").exists());
}

/// Write failures surface as reported errors, never panics.
#[tokio::test]
async fn backend_failures_are_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();

    let json = JsonFileStore::new(dir.path().join("absent"));
    let err = json.write(&john_doe_order()).await.unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));

    let sqlite = SqliteStore::new("sqlite:/no/such/place/orders.db");
    let err = sqlite.write(&john_doe_order()).await.unwrap_err();
    assert!(matches!(err, StoreError::Connection(_)));
}
