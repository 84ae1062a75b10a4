pub mod duration;
pub mod growth;
pub mod session;
pub mod shorthand;
