//! Client-side route table.
//!
//! Four fixed destinations, matched exactly; there are no parameters and no
//! nested paths. The shell layout wraps every page with the nav bar, footer,
//! and toast host.

use dioxus::prelude::*;

use crate::components::app_shell::Shell;
use crate::pages::{Admin, Home, Upload, Verify};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/upload")]
    Upload {},
    #[route("/verify")]
    Verify {},
    #[route("/admin")]
    Admin {},
}
