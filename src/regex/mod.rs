// Regular expressions compiled once per process

#[macro_use]
mod cache;
