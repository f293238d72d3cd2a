//! A singly linked list playground: an arena-backed list with head and tail handles, and a
//! tiny command language for walking through its operations.

pub mod command;
pub mod linked_list;

pub use crate::command::{parse_script, Command, Outcome, ParseError};
pub use crate::linked_list::{IndexPolicy, Iter, IntoIter, LinkedList, Node, NodeId};
