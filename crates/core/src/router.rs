use crate::models::session::Session;

/// The fixed set of named views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    Dashboard,
    Account,
    Deposit,
    Withdrawal,
    Orders,
    History,
}

impl Route {
    /// Map a path to a route. `/` lands on the dashboard (then gets
    /// guarded). Unknown paths return `None`; the frontend shows its 404.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Dashboard),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/forgot-password" => Some(Route::ForgotPassword),
            "/dashboard" => Some(Route::Dashboard),
            "/dashboard/account" => Some(Route::Account),
            "/dashboard/deposit" => Some(Route::Deposit),
            "/dashboard/withdrawal" => Some(Route::Withdrawal),
            "/dashboard/orders" => Some(Route::Orders),
            "/dashboard/history" => Some(Route::History),
            _ => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::ForgotPassword => "/forgot-password",
            Route::Dashboard => "/dashboard",
            Route::Account => "/dashboard/account",
            Route::Deposit => "/dashboard/deposit",
            Route::Withdrawal => "/dashboard/withdrawal",
            Route::Orders => "/dashboard/orders",
            Route::History => "/dashboard/history",
        }
    }

    /// The three auth views are reachable without a session.
    #[must_use]
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register | Route::ForgotPassword)
    }
}

/// Outcome of resolving a navigation against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Render the requested route.
    Allow(Route),
    /// Protected route without a session. Go to login instead.
    RedirectToLogin,
}

/// Guard a navigation: protected views require a session.
#[must_use]
pub fn resolve(route: Route, session: Option<&Session>) -> Resolution {
    if route.is_public() || session.is_some() {
        Resolution::Allow(route)
    } else {
        Resolution::RedirectToLogin
    }
}
