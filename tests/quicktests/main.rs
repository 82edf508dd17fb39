//! Property tests against the public API.

mod pipeline;
mod tree;
