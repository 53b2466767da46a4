pub mod dealer;
pub mod review;
pub mod sentiment;
