use user::UserService;

pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod router;
pub mod routes;
pub mod user;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}
