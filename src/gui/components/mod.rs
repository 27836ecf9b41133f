pub mod notice;
pub mod option_list;
pub mod set_selector;
