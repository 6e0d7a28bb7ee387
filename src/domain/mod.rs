pub mod booking;
pub mod common;
pub mod contact;
pub mod customer;
pub mod room;

#[cfg(test)]
pub(crate) mod testing;
