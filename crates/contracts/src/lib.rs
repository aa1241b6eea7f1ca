//! Data contracts and client-side rules of the card store front end

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
pub mod usecases;
