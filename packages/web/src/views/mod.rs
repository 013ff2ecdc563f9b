mod login;
pub use login::Login;

mod area_select;
pub use area_select::AreaSelect;

mod form;
pub use form::FormScreen;

mod admin;
pub use admin::Admin;
