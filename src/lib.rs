#![doc = include_str!("../README.md")]

pub mod error;
pub mod location;
pub mod persist;
pub mod query;
pub mod storage;
pub mod url_decoding;


pub use error::Error;
pub use location::Location;
pub use persist::{ParameterPersister, PersisterConfig, TaskAssignment, TASK_PARAMETERS};
pub use query::{extract_parameters_from, parse_query, ParameterMap, QueryStringReader};
pub use storage::{MemoryStorage, OriginStorage, Storage};
