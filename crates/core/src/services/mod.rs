pub mod auth_service;
pub mod chart_service;
pub mod market_service;
pub mod portfolio_service;
