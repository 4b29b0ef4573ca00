pub mod api;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
