pub mod abstract_trait;
pub mod di;
pub mod domain;
pub mod form;
pub mod listing;
pub mod service;
pub mod state;
pub mod views;
