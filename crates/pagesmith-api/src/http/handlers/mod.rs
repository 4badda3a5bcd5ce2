pub mod generate;
pub mod index;
pub mod publish;
pub mod site;
