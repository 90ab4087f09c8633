pub mod api;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod docs;
pub mod model;
pub mod platform;
pub mod routes;
