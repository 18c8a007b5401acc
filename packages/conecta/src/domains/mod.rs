pub mod board;
pub mod locations;
pub mod needs;
