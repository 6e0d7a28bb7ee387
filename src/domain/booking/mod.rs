pub mod dto;
pub mod search;
pub mod service;
