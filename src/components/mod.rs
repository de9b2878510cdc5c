pub mod character_form;
pub mod design_system;
pub mod fieldset;
pub mod info_panel;
