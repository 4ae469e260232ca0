pub mod country_ref;
pub mod feed;

pub use country_ref::load_country_table;
pub use feed::read_feed;
