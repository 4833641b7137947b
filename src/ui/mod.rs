pub mod feedback;
pub mod panels;
pub mod results;
