mod common;
mod viewport;
