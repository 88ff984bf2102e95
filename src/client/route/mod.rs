pub mod admin;
pub mod bookings;
pub mod favorites;
pub mod home;
pub mod kos_detail;
pub mod login;
pub mod not_found;
pub mod register;

pub use admin::AdminStats;
pub use bookings::Bookings;
pub use favorites::Favorites;
pub use home::Home;
pub use kos_detail::KosDetail;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
