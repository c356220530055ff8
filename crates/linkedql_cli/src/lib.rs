//! Step vocabulary shared by the `linkedql` binary and its tests.

pub mod vocab;
