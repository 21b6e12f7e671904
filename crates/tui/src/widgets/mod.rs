mod stateful_list;
mod text_field;

pub use stateful_list::StatefulList;
pub use text_field::TextField;
