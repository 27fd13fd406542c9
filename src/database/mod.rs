pub mod activity_directory;
pub mod seed;

pub use activity_directory::{ActivityDirectory, DirectoryError, ErrorKind, RosterChange};
pub use seed::{ActivityMap, SeedError};
