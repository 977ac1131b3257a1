pub mod clothing;
