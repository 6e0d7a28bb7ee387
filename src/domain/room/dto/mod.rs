pub mod room_patch_request;
pub mod room_upsert_request;
