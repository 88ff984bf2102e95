pub use super::booking::Entity as Booking;
pub use super::favorite::Entity as Favorite;
pub use super::kos::Entity as Kos;
pub use super::kos_photo::Entity as KosPhoto;
pub use super::post::Entity as Post;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
