// Application layer - Use cases and gateway traits
pub mod burn_service;
pub mod patient_gateway;
pub mod poller;
pub mod render;
