pub mod booking_entity;
pub mod booking_repository;
pub mod booking_repository_trait;
