pub mod booking_patch_request;
pub mod booking_upsert_request;
