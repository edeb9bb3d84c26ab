use super::*;
use crate::core::SeedAccounts;
use crate::db::seed;
use rust_decimal::Decimal;
use shared::models::{CreateOrderItem, TableStatus};

fn create_test_manager(clear_policy: TableClearPolicy) -> OrdersManager {
    create_manager_with(TimestampPolicy::FirstEntry, clear_policy)
}

fn create_manager_with(
    timestamp_policy: TimestampPolicy,
    clear_policy: TableClearPolicy,
) -> OrdersManager {
    let db = Arc::new(MemoryDb::new());
    seed::seed(&db, &SeedAccounts::default(), true).unwrap();
    OrdersManager::new(db, timestamp_policy, clear_policy)
}

fn line(dish_id: &str, quantity: i32) -> CreateOrderItem {
    CreateOrderItem {
        dish_id: dish_id.to_string(),
        quantity,
        notes: None,
    }
}

fn request(table_id: &str, items: Vec<CreateOrderItem>, party_size: Option<i32>) -> CreateOrderRequest {
    CreateOrderRequest {
        table_id: table_id.to_string(),
        items,
        party_size,
    }
}

fn table(manager: &OrdersManager, id: &str) -> DiningTable {
    manager.db.read().table(id).cloned().unwrap()
}

fn order(manager: &OrdersManager, id: &str) -> Order {
    manager.db.read().order(id).cloned().unwrap()
}

/// Seat an order on t2 and return it
fn seat_t2(manager: &OrdersManager) -> Order {
    manager
        .create_order(request("t2", vec![line("1", 2), line("4", 1)], Some(3)))
        .unwrap()
}

fn deliver_all(manager: &OrdersManager, order: &Order) {
    for item in &order.items {
        manager
            .update_item_status(&order.id, &item.id, ItemStatus::Ready)
            .unwrap();
        manager
            .update_item_status(&order.id, &item.id, ItemStatus::Delivered)
            .unwrap();
    }
}

// ========================================================================
// Order creation
// ========================================================================

#[test]
fn test_create_order_seats_table() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);

    // (2 * 8.99 + 3.49) * 1.10 = 23.617
    assert_eq!(order.total, Decimal::new(2362, 2));
    assert_eq!(order.status, OrderStatus::Active);
    assert_eq!(order.items.len(), 2);
    assert!(order.items.iter().all(|i| i.status == ItemStatus::Pending));

    let t2 = table(&manager, "t2");
    assert_eq!(t2.status, TableStatus::Occupied);
    assert_eq!(t2.current_order_id.as_deref(), Some(order.id.as_str()));
    assert_eq!(t2.party_size, Some(3));
}

#[test]
fn test_create_order_rejections_leave_table_untouched() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let cases = [
        (request("t2", vec![], None), ManagerError::OrderEmpty.code()),
        (
            request("t2", vec![line("1", 0)], None),
            shared::ErrorCode::ValidationFailed,
        ),
        (
            request("t2", vec![line("1", 1)], Some(5)),
            shared::ErrorCode::ValidationFailed,
        ),
        (
            request("t2", vec![line("1", 1)], Some(0)),
            shared::ErrorCode::ValidationFailed,
        ),
        (
            request("t2", vec![line("1", 1), line("99", 1)], None),
            shared::ErrorCode::DishNotFound,
        ),
        (
            request("nope", vec![line("1", 1)], None),
            shared::ErrorCode::TableNotFound,
        ),
        (
            request("t4", vec![line("1", 1)], None),
            shared::ErrorCode::TableNotAvailable,
        ),
    ];

    let orders_before = manager.db.read().orders.len();
    for (req, code) in cases {
        let err = manager.create_order(req).unwrap_err();
        assert_eq!(err.code(), code, "{err}");
    }

    let t2 = table(&manager, "t2");
    assert_eq!(t2.status, TableStatus::Available);
    assert!(t2.current_order_id.is_none());
    assert!(t2.party_size.is_none());
    assert_eq!(manager.db.read().orders.len(), orders_before);
}

#[test]
fn test_create_order_on_occupied_table() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let first = seat_t2(&manager);
    let err = manager
        .create_order(request("t2", vec![line("7", 1)], None))
        .unwrap_err();
    assert!(matches!(err, ManagerError::TableNotAvailable(2)));
    assert_eq!(
        table(&manager, "t2").current_order_id.as_deref(),
        Some(first.id.as_str())
    );
}

#[test]
fn test_unavailable_dish_rejected() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    manager
        .db
        .write()
        .dishes
        .iter_mut()
        .find(|d| d.id == "7")
        .unwrap()
        .available = false;

    let err = manager
        .create_order(request("t2", vec![line("7", 1)], None))
        .unwrap_err();
    assert!(matches!(err, ManagerError::DishUnavailable(_)));
    assert!(table(&manager, "t2").is_available());
}

#[test]
fn test_quantity_above_limit_rejected() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let err = manager
        .create_order(request("t2", vec![line("1", 10_000)], None))
        .unwrap_err();
    assert!(matches!(
        err,
        ManagerError::InvalidQuantity {
            quantity: 10_000,
            ..
        }
    ));
    assert_eq!(err.code(), shared::ErrorCode::ValidationFailed);

    let order = manager
        .create_order(request("t2", vec![line("1", 9999)], None))
        .unwrap();
    assert_eq!(order.items[0].quantity, 9999);
}

#[test]
fn test_total_overflow_rejected() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    // a stored price beyond anything the catalog accepts
    manager
        .db
        .write()
        .dishes
        .iter_mut()
        .find(|d| d.id == "1")
        .unwrap()
        .price = Decimal::from_i128_with_scale(10_i128.pow(26), 0);

    let err = manager
        .create_order(request("t2", vec![line("1", 9999)], None))
        .unwrap_err();
    assert!(matches!(err, ManagerError::TotalOverflow));

    let app: shared::AppError = err.into();
    assert_eq!(app.code, shared::ErrorCode::ValidationFailed);

    // nothing was seated and the lock is still usable
    let t2 = table(&manager, "t2");
    assert_eq!(t2.status, TableStatus::Available);
    assert!(t2.current_order_id.is_none());
    manager
        .create_order(request("t2", vec![line("4", 1)], None))
        .unwrap();
}

#[test]
fn test_total_fixed_at_creation() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);
    manager
        .db
        .write()
        .dishes
        .iter_mut()
        .find(|d| d.id == "1")
        .unwrap()
        .price = Decimal::new(1999, 2);

    assert_eq!(self::order(&manager, &order.id).total, Decimal::new(2362, 2));
}

#[test]
fn test_blank_notes_dropped() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let mut with_notes = line("1", 1);
    with_notes.notes = Some("sin cebolla".to_string());
    let mut blank = line("4", 1);
    blank.notes = Some("   ".to_string());

    let order = manager
        .create_order(request("t5", vec![with_notes, blank], None))
        .unwrap();
    assert_eq!(order.items[0].notes.as_deref(), Some("sin cebolla"));
    assert!(order.items[1].notes.is_none());
    assert!(table(&manager, "t5").party_size.is_none());
}

// ========================================================================
// Item status
// ========================================================================

#[test]
fn test_item_walks_to_delivered() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);
    let item_id = order.items[0].id.clone();

    let updated = manager
        .update_item_status(&order.id, &item_id, ItemStatus::Preparing)
        .unwrap();
    let item = updated.item(&item_id).unwrap();
    assert!(item.started_at.is_some());
    assert!(item.completed_at.is_none());

    let updated = manager
        .update_item_status(&order.id, &item_id, ItemStatus::Ready)
        .unwrap();
    assert!(updated.item(&item_id).unwrap().completed_at.is_some());

    manager
        .update_item_status(&order.id, &item_id, ItemStatus::Delivered)
        .unwrap();
    let err = manager
        .update_item_status(&order.id, &item_id, ItemStatus::Ready)
        .unwrap_err();
    assert_eq!(err.code(), shared::ErrorCode::ItemStatusTransitionInvalid);
}

#[test]
fn test_item_cannot_skip_to_delivered() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);
    let err = manager
        .update_item_status(&order.id, &order.items[0].id, ItemStatus::Delivered)
        .unwrap_err();
    assert!(matches!(err, ManagerError::InvalidTransition(_)));
    assert_eq!(
        self::order(&manager, &order.id).items[0].status,
        ItemStatus::Pending
    );
}

#[test]
fn test_item_unknown_ids() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);
    assert!(matches!(
        manager.update_item_status("nope", "x", ItemStatus::Ready),
        Err(ManagerError::OrderNotFound(_))
    ));
    assert!(matches!(
        manager.update_item_status(&order.id, "x", ItemStatus::Ready),
        Err(ManagerError::ItemNotFound(_))
    ));
}

#[test]
fn test_every_entry_policy_restamps() {
    let manager = create_manager_with(TimestampPolicy::EveryEntry, TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);
    let item_id = &order.items[0].id;

    let first = manager
        .update_item_status(&order.id, item_id, ItemStatus::Preparing)
        .unwrap()
        .item(item_id)
        .unwrap()
        .started_at;
    std::thread::sleep(std::time::Duration::from_millis(5));
    manager
        .update_item_status(&order.id, item_id, ItemStatus::Pending)
        .unwrap();
    let second = manager
        .update_item_status(&order.id, item_id, ItemStatus::Preparing)
        .unwrap()
        .item(item_id)
        .unwrap()
        .started_at;

    assert!(second > first);
}

#[test]
fn test_item_update_on_closed_order() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);
    manager
        .update_order_status(&order.id, OrderStatus::Cancelled)
        .unwrap();
    let err = manager
        .update_item_status(&order.id, &order.items[0].id, ItemStatus::Preparing)
        .unwrap_err();
    assert_eq!(err.code(), shared::ErrorCode::OrderNotActive);
}

// ========================================================================
// Order status
// ========================================================================

#[test]
fn test_complete_requires_all_delivered() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);

    let err = manager
        .update_order_status(&order.id, OrderStatus::Completed)
        .unwrap_err();
    assert!(matches!(err, ManagerError::OrderHasOpenItems { open: 2, .. }));

    deliver_all(&manager, &order);
    let closed = manager
        .update_order_status(&order.id, OrderStatus::Completed)
        .unwrap();
    assert_eq!(closed.status, OrderStatus::Completed);
    assert!(closed.completed_at.is_some());

    // table stays occupied until cleared
    assert!(table(&manager, "t2").is_occupied());

    let err = manager
        .update_order_status(&order.id, OrderStatus::Cancelled)
        .unwrap_err();
    assert!(matches!(err, ManagerError::OrderAlreadyCompleted(_)));
}

#[test]
fn test_closed_order_keeps_table_until_cleared() {
    let manager = create_test_manager(TableClearPolicy::RequireOccupied);
    let seated = seat_t2(&manager);
    manager
        .update_order_status(&seated.id, OrderStatus::Cancelled)
        .unwrap();

    // occupied, still pointing at the closed order
    let t2 = table(&manager, "t2");
    assert_eq!(t2.status, TableStatus::Occupied);
    assert_eq!(t2.current_order_id.as_deref(), Some(seated.id.as_str()));
    assert_eq!(t2.party_size, Some(3));

    let err = manager
        .create_order(request("t2", vec![line("4", 1)], None))
        .unwrap_err();
    assert!(matches!(err, ManagerError::TableNotAvailable(2)));

    // clearing frees it and leaves the closed order as it was
    let t2 = manager.clear_table("t2").unwrap();
    assert_eq!(t2.status, TableStatus::Available);
    assert!(t2.current_order_id.is_none());
    assert_eq!(
        order(&manager, &seated.id).status,
        OrderStatus::Cancelled
    );
}

#[test]
fn test_cannot_reopen() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);
    assert!(matches!(
        manager.update_order_status(&order.id, OrderStatus::Active),
        Err(ManagerError::InvalidOrderStatus)
    ));
    manager
        .update_order_status(&order.id, OrderStatus::Cancelled)
        .unwrap();
    assert!(matches!(
        manager.update_order_status(&order.id, OrderStatus::Cancelled),
        Err(ManagerError::OrderAlreadyCancelled(_))
    ));
}

// ========================================================================
// Table clear
// ========================================================================

#[test]
fn test_clear_cancels_unfinished_order() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);

    let t2 = manager.clear_table("t2").unwrap();
    assert_eq!(t2.status, TableStatus::Available);
    assert!(t2.current_order_id.is_none());
    assert!(t2.party_size.is_none());

    let closed = self::order(&manager, &order.id);
    assert_eq!(closed.status, OrderStatus::Cancelled);
    assert!(closed.completed_at.is_some());
}

#[test]
fn test_clear_completes_delivered_order() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);
    deliver_all(&manager, &order);

    manager.clear_table("t2").unwrap();
    assert_eq!(self::order(&manager, &order.id).status, OrderStatus::Completed);
}

#[test]
fn test_clear_idempotent_on_available_table() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let before = table(&manager, "t2");
    let after = manager.clear_table("t2").unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_clear_require_occupied() {
    let manager = create_test_manager(TableClearPolicy::RequireOccupied);
    let err = manager.clear_table("t2").unwrap_err();
    assert!(matches!(err, ManagerError::TableAlreadyEmpty(2)));
    assert!(table(&manager, "t2").is_available());

    seat_t2(&manager);
    manager.clear_table("t2").unwrap();
}

#[test]
fn test_clear_unknown_table() {
    for policy in [TableClearPolicy::Idempotent, TableClearPolicy::RequireOccupied] {
        let manager = create_test_manager(policy);
        assert!(matches!(
            manager.clear_table("t99"),
            Err(ManagerError::TableNotFound(_))
        ));
    }
}

#[test]
fn test_table_reusable_after_clear() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    seat_t2(&manager);
    manager.clear_table("t2").unwrap();
    let second = seat_t2(&manager);
    assert_eq!(
        table(&manager, "t2").current_order_id.as_deref(),
        Some(second.id.as_str())
    );
}

// ========================================================================
// Delete
// ========================================================================

#[test]
fn test_delete_order_frees_table() {
    let manager = create_test_manager(TableClearPolicy::Idempotent);
    let order = seat_t2(&manager);
    manager.delete_order(&order.id).unwrap();

    assert!(manager.db.read().order(&order.id).is_none());
    let t2 = table(&manager, "t2");
    assert!(t2.is_available());
    assert!(t2.current_order_id.is_none());

    assert!(matches!(
        manager.delete_order(&order.id),
        Err(ManagerError::OrderNotFound(_))
    ));
}
