pub mod application;
pub mod audit;
pub mod data;
pub mod debug;
pub mod entities;
pub mod report;
pub mod view;
