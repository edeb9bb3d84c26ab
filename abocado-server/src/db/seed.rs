//! Demo data and initial staff accounts

use chrono::Utc;
use rust_decimal::Decimal;
use shared::models::{
    DiningTable, Dish, DishCategory, Order, OrderItem, OrderStatus, Role, TableStatus,
};
use shared::order::{ItemStatus, order_total};
use uuid::Uuid;

use super::MemoryDb;
use super::models::StaffAccount;
use crate::core::SeedAccounts;
use crate::utils::AppError;

/// (id, name, description, price in cents, category, prep minutes)
const DEMO_DISHES: &[(&str, &str, &str, i64, DishCategory, u32)] = &[
    ("1", "Burger Clásico", "Jugosa hamburguesa con queso, lechuga y tomate", 899, DishCategory::Principal, 12),
    ("2", "Pollo Frito Crujiente", "Pechuga de pollo crujiente servida con papas", 999, DishCategory::Principal, 15),
    ("3", "Sándwich de Pollo", "Pan tostado con pollo a la parrilla, aguacate y mayonesa", 799, DishCategory::Principal, 10),
    ("4", "Papas Fritas", "Papas fritas crujientes con sal", 349, DishCategory::Lado, 8),
    ("5", "Aros de Cebolla", "Aros de cebolla rebozados y fritos", 449, DishCategory::Lado, 10),
    ("6", "Ensalada Fresca", "Ensalada con lechuga, tomate, pepino y aderezo de la casa", 699, DishCategory::Lado, 5),
    ("7", "Refresco", "Refresco frío (Cola, Limón, Naranja)", 249, DishCategory::Bebida, 2),
    ("8", "Jugo Natural", "Jugo recién exprimido (Naranja, Piña, Sandía)", 399, DishCategory::Bebida, 3),
    ("9", "Helado", "Helado cremoso (Vainilla, Chocolate, Fresa)", 399, DishCategory::Postre, 2),
    ("10", "Tiramisú", "Tiramisú tradicional italiano", 599, DishCategory::Postre, 1),
];

/// (id, number, capacity, status)
const DEMO_TABLES: &[(&str, u32, u32, TableStatus)] = &[
    ("t1", 1, 2, TableStatus::Available),
    ("t2", 2, 4, TableStatus::Available),
    ("t3", 3, 4, TableStatus::Available),
    ("t4", 4, 2, TableStatus::Reserved),
    ("t5", 5, 6, TableStatus::Available),
    ("t6", 6, 4, TableStatus::Available),
];

/// Orders seated on the demo floor: (table, party size, [(dish, qty, status)])
const DEMO_ORDERS: &[(&str, u32, &[(&str, u32, ItemStatus)])] = &[
    ("t1", 2, &[("1", 1, ItemStatus::Pending), ("7", 2, ItemStatus::Pending)]),
    ("t3", 3, &[("2", 2, ItemStatus::Preparing), ("4", 1, ItemStatus::Ready)]),
    ("t6", 4, &[("3", 1, ItemStatus::Ready), ("9", 2, ItemStatus::Pending)]),
];

const DEMO_STAFF: &[(&str, Role)] = &[("admin", Role::Admin), ("chef", Role::Chef), ("mozo", Role::Waiter)];

/// Seed the store
///
/// Staff accounts are created whenever the store has none; the demo menu,
/// floor plan and orders only when `demo` is set.
pub fn seed(db: &MemoryDb, accounts: &SeedAccounts, demo: bool) -> Result<(), AppError> {
    let mut data = db.write();
    let now = Utc::now();

    if data.staff.is_empty() {
        for (username, role) in DEMO_STAFF {
            let password = match role {
                Role::Admin => &accounts.admin_password,
                Role::Chef => &accounts.chef_password,
                Role::Waiter => &accounts.waiter_password,
            };
            let hash_pass = StaffAccount::hash_password(password)
                .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
            data.staff.push(StaffAccount {
                id: Uuid::new_v4().to_string(),
                username: username.to_string(),
                hash_pass,
                role: *role,
                created_at: now,
            });
        }
        tracing::info!(count = data.staff.len(), "Seeded staff accounts");
    }

    if !demo || !data.dishes.is_empty() || !data.tables.is_empty() {
        return Ok(());
    }

    data.dishes = DEMO_DISHES
        .iter()
        .map(|(id, name, description, cents, category, prep_time)| Dish {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price: Decimal::new(*cents, 2),
            category: *category,
            prep_time: *prep_time,
            image: format!("/images/dishes/{id}.jpg"),
            available: true,
            created_at: now,
        })
        .collect();

    data.tables = DEMO_TABLES
        .iter()
        .map(|(id, number, capacity, status)| DiningTable {
            id: id.to_string(),
            number: *number,
            capacity: *capacity,
            status: *status,
            current_order_id: None,
            party_size: None,
            created_at: now,
        })
        .collect();

    for (table_id, party_size, lines) in DEMO_ORDERS {
        let items: Vec<OrderItem> = lines
            .iter()
            .map(|(dish_id, quantity, status)| OrderItem {
                id: Uuid::new_v4().to_string(),
                dish_id: dish_id.to_string(),
                quantity: *quantity,
                notes: None,
                status: *status,
                started_at: matches!(status, ItemStatus::Preparing | ItemStatus::Ready)
                    .then_some(now),
                completed_at: (*status == ItemStatus::Ready).then_some(now),
            })
            .collect();
        let total = order_total(items.iter().filter_map(|item| {
            data.dish(&item.dish_id)
                .map(|dish| (dish.price, item.quantity))
        }))
        .unwrap_or_default();
        let order = Order {
            id: Uuid::new_v4().to_string(),
            table_id: table_id.to_string(),
            items,
            status: OrderStatus::Active,
            created_at: now,
            completed_at: None,
            total,
        };
        if let Some(table) = data.table_mut(table_id) {
            table.occupy(order.id.clone(), Some(*party_size));
        }
        data.orders.push(order);
    }

    tracing::info!(
        dishes = data.dishes.len(),
        tables = data.tables.len(),
        orders = data.orders.len(),
        "Seeded demo data"
    );

    Ok(())
}
