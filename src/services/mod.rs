pub mod form_state;
pub mod info_panel;
pub mod trait_guard;
