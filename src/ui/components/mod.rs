mod confirm_dialog;
mod item_form;
mod item_table;
mod stat_cards;
mod toast;

pub use confirm_dialog::ConfirmDialog;
pub use item_form::{FormAction, ItemForm};
pub use item_table::{ItemTable, TableAction};
pub use stat_cards::StatCards;
pub use toast::Toast;
