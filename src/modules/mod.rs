pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod jump;
pub mod node;
pub mod open_list;
pub mod ordered_float;
pub mod path_builder;
pub mod path_finder;
pub mod position;
