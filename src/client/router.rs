use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    AdminStats, Bookings, Favorites, Home, KosDetail, Login, NotFound, Register,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/kos/:id")]
        KosDetail { id: i32 },

        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[layout(RequiresLoggedIn)]
            #[route("/bookings")]
            Bookings {},

            #[route("/favorites")]
            Favorites {},
        #[end_layout]

        #[layout(RequiresAdmin)]
            #[route("/admin")]
            AdminStats {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
