pub mod api_json;
pub mod logged_in_user;
