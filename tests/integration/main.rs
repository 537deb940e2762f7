//! End-to-end tests over the `spinhub` facade.

mod link_test;
mod slug_test;
mod token_test;
