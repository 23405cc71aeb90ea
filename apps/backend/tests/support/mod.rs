#![allow(dead_code)]

pub mod down_repo;
pub mod factory;

pub use app_builder::create_test_app;
pub use down_repo::down_state;
pub use factory::{memory_state, seeded_state};
