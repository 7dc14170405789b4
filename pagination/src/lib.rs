pub mod controls;
pub mod links;
pub mod slice;
pub mod window;
