//! Reading custom entries documents from files, byte streams and JSON trees.

pub mod parse;

pub use parse::{
    from_value, from_value_with, read_file, read_file_with, read_from_reader,
    read_from_reader_with, read_str, read_str_with,
};
