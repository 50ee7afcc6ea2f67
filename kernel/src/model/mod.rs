pub mod booking;
pub mod id;
pub mod venue;
