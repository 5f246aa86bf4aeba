pub mod console;
pub mod inspector;
pub mod robots;
