pub mod customer_patch_request;
pub mod customer_upsert_request;
