pub mod compare;
pub mod players;
