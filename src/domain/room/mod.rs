pub mod dto;
pub mod room_type;
pub mod service;
