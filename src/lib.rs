#![doc = "The `taskmanager` library crate."]
#![doc = ""]
#![doc = "Contains the domain models, authentication machinery, the ownership-scoped"]
#![doc = "service layer, routing configuration, and error handling for the task"]
#![doc = "manager API. The main binary (`main.rs`) uses it to construct and run the"]
#![doc = "application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
