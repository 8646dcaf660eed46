mod client_tests;
mod support;
