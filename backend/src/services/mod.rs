pub mod dealers;
pub mod sentiment;
