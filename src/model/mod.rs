pub mod condition;
pub mod conversation;
pub mod message;
pub mod session;
pub mod travel;
