pub mod dedup_vector;
pub use dedup_vector::dedup_vector;

pub mod glob_to_regex;
pub use glob_to_regex::glob_to_regex;

pub mod rank_phrases;
pub use rank_phrases::rank_phrases;

pub mod read_collocation_table;
pub use read_collocation_table::{
    read_collocation_table_from_path, read_collocation_table_from_string,
};

pub mod regex_to_fixed;
pub use regex_to_fixed::regex_to_fixed;

pub mod sort_collocations;
pub use sort_collocations::sort_collocations;
