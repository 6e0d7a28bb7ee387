pub mod contact_message_request;
