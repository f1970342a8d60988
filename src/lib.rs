pub mod auth;
pub mod conversation;
pub mod db;
pub mod error;
pub mod group;
pub mod handlers;
pub mod message;
pub mod middleware;
pub mod private_chat;
pub mod routes;
pub mod state;
pub mod user;
