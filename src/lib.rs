pub mod clips;
