pub mod api;
pub mod dictionaries;
pub mod form_state;
pub mod results;
pub mod view;
