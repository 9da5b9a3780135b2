pub mod aggregate;
pub mod hour;
pub mod prices;
pub mod ranges;
pub mod sparkline;
