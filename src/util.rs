//! Shared utility modules used across prefixsim components.

pub mod paged_stack;
