pub mod alert;
pub mod loading;
