//! Integration tests combining multiple components
//!
//! These tests drive the transformer, the input resolver and the binary end to end and
//! inspect the JPEG files they leave behind.

mod test_directory_batch;
