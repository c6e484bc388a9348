pub mod assemble;
pub mod scan;
