pub mod cut;
pub mod digest;
pub mod enzymes;
pub mod sites;
