//! User registration, login and JWT verification

pub mod error;
pub mod handlers;
pub mod memory;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

pub use error::UserAuthError;
pub use memory::MemoryUserStore;
pub use models::{AuthResponse, Claims, LoginRequest, RegisterRequest, RegisterResponse, User};
pub use repository::PgUserStore;
pub use service::UserAuthService;
pub use store::UserStore;
