mod error;
mod generator;
