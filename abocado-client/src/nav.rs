//! Role-gated navigation
//!
//! | Route | Access |
//! |-------|--------|
//! | `/`, `/login`, `/carta` | public |
//! | `/dashboard`, `/menu` | any signed-in role |
//! | `/tables`, `/service`, `/ready` | admin, waiter |
//! | `/kitchen` | admin, chef |
//! | `/admin` | admin |

use shared::models::Role;

use crate::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Carta,
    Dashboard,
    Menu,
    Tables,
    Service,
    Ready,
    Kitchen,
    Admin,
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted(Route),
    RedirectLogin,
    RedirectDashboard,
    NotFound,
}

const ANY_ROLE: &[Role] = &Role::ALL;
const FLOOR: &[Role] = &[Role::Admin, Role::Waiter];
const KITCHEN: &[Role] = &[Role::Admin, Role::Chef];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Home,
        Route::Login,
        Route::Carta,
        Route::Dashboard,
        Route::Menu,
        Route::Tables,
        Route::Service,
        Route::Ready,
        Route::Kitchen,
        Route::Admin,
    ];

    /// Match a path, ignoring query string and trailing slash
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Carta => "/carta",
            Self::Dashboard => "/dashboard",
            Self::Menu => "/menu",
            Self::Tables => "/tables",
            Self::Service => "/service",
            Self::Ready => "/ready",
            Self::Kitchen => "/kitchen",
            Self::Admin => "/admin",
        }
    }

    /// Roles allowed in; `None` for public routes
    pub fn roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::Home | Self::Login | Self::Carta => None,
            Self::Dashboard | Self::Menu => Some(ANY_ROLE),
            Self::Tables | Self::Service | Self::Ready => Some(FLOOR),
            Self::Kitchen => Some(KITCHEN),
            Self::Admin => Some(ADMIN_ONLY),
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.roles().is_none_or(|roles| roles.contains(&role))
    }

    /// Routes a role can open, for building the navigation bar
    pub fn visible_to(role: Role) -> Vec<Route> {
        Self::ALL
            .into_iter()
            .filter(|r| r.roles().is_some_and(|roles| roles.contains(&role)))
            .collect()
    }
}

/// Decide where a navigation to `path` ends up
pub fn authorize(path: &str, session: Option<&Session>) -> Access {
    let Some(route) = Route::parse(path) else {
        return Access::NotFound;
    };
    if route.roles().is_none() {
        return Access::Granted(route);
    }
    match session {
        None => Access::RedirectLogin,
        Some(s) if route.allows(s.role()) => Access::Granted(route),
        Some(_) => Access::RedirectDashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::client::UserInfo;

    fn session(role: Role) -> Session {
        Session {
            token: "t".to_string(),
            user: UserInfo {
                id: "u".to_string(),
                username: role.as_str().to_string(),
                role,
            },
        }
    }

    #[test]
    fn test_public_routes() {
        for path in ["/", "/login", "/carta"] {
            assert!(matches!(authorize(path, None), Access::Granted(_)), "{path}");
        }
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        assert_eq!(authorize("/dashboard", None), Access::RedirectLogin);
        assert_eq!(authorize("/kitchen", None), Access::RedirectLogin);
    }

    #[test]
    fn test_role_matrix() {
        let chef = session(Role::Chef);
        let waiter = session(Role::Waiter);
        let admin = session(Role::Admin);

        assert_eq!(authorize("/kitchen", Some(&chef)), Access::Granted(Route::Kitchen));
        assert_eq!(authorize("/tables", Some(&chef)), Access::RedirectDashboard);
        assert_eq!(authorize("/ready", Some(&chef)), Access::RedirectDashboard);
        assert_eq!(authorize("/menu", Some(&chef)), Access::Granted(Route::Menu));

        assert_eq!(authorize("/ready", Some(&waiter)), Access::Granted(Route::Ready));
        assert_eq!(authorize("/kitchen", Some(&waiter)), Access::RedirectDashboard);
        assert_eq!(authorize("/admin", Some(&waiter)), Access::RedirectDashboard);

        for route in Route::ALL {
            assert!(route.allows(Role::Admin), "{route:?}");
        }
        assert_eq!(authorize("/admin", Some(&admin)), Access::Granted(Route::Admin));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(authorize("/nope", None), Access::NotFound);
        assert_eq!(authorize("/nope", Some(&session(Role::Admin))), Access::NotFound);
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(Route::parse("/tables/"), Some(Route::Tables));
        assert_eq!(Route::parse("/carta?category=postre"), Some(Route::Carta));
        assert_eq!(Route::parse(""), Some(Route::Home));
    }

    #[test]
    fn test_visible_to() {
        assert_eq!(
            Route::visible_to(Role::Chef),
            vec![Route::Dashboard, Route::Menu, Route::Kitchen]
        );
    }
}
