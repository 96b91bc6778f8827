pub mod normalize_search_term;
pub mod read_source;
pub mod short_company_name;
pub mod write_file_atomically;

pub use normalize_search_term::normalize_search_term;
pub use read_source::{read_source, read_source_to_string};
pub use short_company_name::short_company_name;
pub use write_file_atomically::write_file_atomically;
