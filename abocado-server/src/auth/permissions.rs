//! 权限定义
//!
//! 固定的角色权限表：所有角色都可读取菜品、桌台和订单并推进菜品状态；
//! 前厅服务由管理员和服务员共享；管理操作仅限管理员。

use shared::models::Role;

/// 路由检查的全部权限
pub const ALL_PERMISSIONS: &[&str] = &[
    "catalog:read",
    "tables:read",
    "orders:read",
    "orders:items",
    "orders:create",
    "orders:manage",
    "tables:clear",
    "catalog:manage",
    "tables:manage",
    "orders:delete",
    "staff:manage",
];

pub const ADMIN_PERMISSIONS: &[&str] = ALL_PERMISSIONS;

pub const WAITER_PERMISSIONS: &[&str] = &[
    "catalog:read",
    "tables:read",
    "orders:read",
    "orders:items",
    "orders:create",
    "orders:manage",
    "tables:clear",
];

pub const CHEF_PERMISSIONS: &[&str] = &["catalog:read", "tables:read", "orders:read", "orders:items"];

pub fn permissions_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => ADMIN_PERMISSIONS,
        Role::Chef => CHEF_PERMISSIONS,
        Role::Waiter => WAITER_PERMISSIONS,
    }
}

pub fn role_has_permission(role: Role, permission: &str) -> bool {
    permissions_for(role).contains(&permission)
}
