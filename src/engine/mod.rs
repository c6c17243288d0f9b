mod dispatcher;

pub use dispatcher::{dispatch, Command, Settings};
