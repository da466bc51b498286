pub mod clubs;
