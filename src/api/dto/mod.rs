pub mod booking_query;
pub mod root_dto;
