pub mod intent;
pub mod message;
pub mod reply;
