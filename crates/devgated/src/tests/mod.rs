//! Test suites for the gateway bootstrap and session behaviour.

mod lib_api;
mod support;
