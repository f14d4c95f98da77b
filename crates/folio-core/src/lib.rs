pub mod ports;
pub mod event_bus;
pub mod resolver;
pub mod suggest;
pub mod conversation;
pub mod controller;
