// Route exports
pub mod error;
pub mod recommend;

pub use error::{handle_json_payload_error, ApiError};
pub use recommend::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(recommend::configure);
}
