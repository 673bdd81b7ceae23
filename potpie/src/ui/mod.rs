// potpie/src/ui/mod.rs
pub mod output;
