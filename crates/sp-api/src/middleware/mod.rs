pub mod cors;
pub mod request_id;

pub use cors::create_cors_layer;
pub use request_id::{RequestId, request_id_middleware};
