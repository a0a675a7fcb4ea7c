//! Integration tests for framecap

mod helpers;

mod build_test;
mod codec_test;
mod controller_test;
mod selector_test;
