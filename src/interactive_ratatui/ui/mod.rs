pub mod app_state;
pub mod commands;
pub mod components;
pub mod events;
pub mod renderer;
pub mod search_coordinator;
pub mod selection_resolver;

#[cfg(test)]
mod renderer_test;
#[cfg(test)]
mod selection_resolver_test;
