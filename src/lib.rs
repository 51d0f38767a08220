pub mod catalog;
pub mod conditions;
pub mod config;
pub mod countdown;
pub mod export;
pub mod i18n;
pub mod planner;
pub mod retry;
pub mod search;
pub mod seo;
pub mod server;
pub mod weather;
