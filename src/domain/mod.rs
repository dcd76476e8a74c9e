pub mod history;
pub mod population;
