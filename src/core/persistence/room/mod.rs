pub mod room_entity;
pub mod room_repository;
pub mod room_repository_trait;
