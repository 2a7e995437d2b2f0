pub mod seat;
pub mod ticket;

pub use seat::Seat;
pub use ticket::Ticket;
