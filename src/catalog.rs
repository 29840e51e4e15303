pub mod domain;
pub mod command;
pub mod factory;
pub mod controller;
