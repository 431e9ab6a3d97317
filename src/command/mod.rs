mod fetch_once;
mod produce;

pub use fetch_once::fetch_once;
pub use produce::produce;
