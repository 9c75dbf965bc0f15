/// Parsers for ISO and lunar date strings.
pub mod data_parsers;
