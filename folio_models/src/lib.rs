pub mod contact;
pub mod theme;
