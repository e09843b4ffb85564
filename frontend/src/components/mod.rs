pub mod blasts;
