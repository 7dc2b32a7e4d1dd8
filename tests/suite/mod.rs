mod catalog;
mod config;
mod machine;
mod stepping;
