pub mod cookie;
pub mod guard;
