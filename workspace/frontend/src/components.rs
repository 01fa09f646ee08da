pub mod games;
pub mod layout;
pub mod placeholder;
pub mod stockmarket;
