pub mod service;
pub mod validation;

pub use service::{
    EditScope, create_event, delete_event, list_events, save_event, update_event,
};
