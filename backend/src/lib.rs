pub mod domain;
pub mod rest;
