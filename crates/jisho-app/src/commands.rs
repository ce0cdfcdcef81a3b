pub mod batch;
pub mod decks;
pub mod fill;

pub use batch::handle_batch;
pub use decks::handle_decks;
pub use fill::handle_fill;
