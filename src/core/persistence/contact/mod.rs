pub mod contact_message_entity;
pub mod contact_message_repository;
pub mod contact_message_repository_trait;
