pub mod multiples;
