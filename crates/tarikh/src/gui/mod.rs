pub mod app;
pub mod bar;
pub mod pages;
pub mod theme;
