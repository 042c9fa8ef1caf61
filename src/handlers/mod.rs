pub mod pessoas;

pub use pessoas::{
    create_person_handler, health_handler, method_not_allowed_handler, not_found_handler,
};
