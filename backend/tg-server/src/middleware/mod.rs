pub mod require_login;
