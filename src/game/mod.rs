pub mod components;
pub mod events;
pub mod intent;
pub mod layout;
pub mod physics;
pub mod types;
pub mod walker;

#[cfg(test)]
pub(crate) mod test_support;
