//! Scenario and concurrency tests for the sharded map.


pub mod support;
