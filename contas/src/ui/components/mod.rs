pub mod delete_confirmation;
pub mod empty_state;
pub mod entry_form;
pub mod filter_bar;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod notification;
pub mod popup;
pub mod screen_title;
pub mod summary_cards;
pub mod tab_bar;
