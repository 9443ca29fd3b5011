pub mod sync;
pub mod todos;
