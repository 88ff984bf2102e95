pub mod header;
pub mod kos_card;
pub mod layout;
pub mod markdown;
pub mod page;
pub mod pagination;
pub mod price;
pub mod protected_layout;

pub use header::Header;
pub use kos_card::KosCard;
pub use layout::Layout;
pub use markdown::Markdown;
pub use page::Page;
pub use pagination::Pagination;
pub use price::Price;
pub use protected_layout::{RequiresAdmin, RequiresLoggedIn};
