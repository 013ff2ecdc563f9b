//! This crate contains all shared UI logic for the workspace.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LoginButton};

mod screen;
pub use screen::{confirm_area, Screen};

mod chart;
pub use chart::{Bar, BarChart, ChartRenderer, ResponseChart};

mod remote;
pub use remote::make_store;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use remote::RemoteStore;
