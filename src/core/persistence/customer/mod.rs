pub mod customer_entity;
pub mod customer_repository;
pub mod customer_repository_trait;
