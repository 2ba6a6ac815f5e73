pub mod name_cleaner;

pub use name_cleaner::{clean_names, normalize_name, strip_emails, strip_wildcards};
