use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    admin::{AdminAdmins, AdminFeedback, AdminPhrases, AdminProfiles, AdminStats},
    Home, Login, NotFound,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/login")]
        Login {},

        #[layout(RequiresLoggedIn)]
            #[route("/")]
            Home {},
        #[end_layout]

        #[layout(RequiresAdmin)]
        #[nest("/admin")]
            #[route("/")]
            AdminProfiles {},

            #[route("/feedback")]
            AdminFeedback {},

            #[route("/phrases")]
            AdminPhrases {},

            #[route("/admins")]
            AdminAdmins {},

            #[route("/stats")]
            AdminStats {},
        #[end_nest]
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
