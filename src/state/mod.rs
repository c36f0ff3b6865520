//! Screen state containers.
//!
//! One container per screen; each owns its data for the screen's lifetime and
//! emits output notifications over a channel registered at construction.

pub mod movie_list;

pub use movie_list::{
    output_channel, release_day_key, DateKeyFn, MovieListError, MovieListOutput, MovieListState,
    MovieRow, OutputReceiver, OutputSender,
};
