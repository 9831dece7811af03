pub mod health;
pub mod objects;
pub mod roles;
pub mod session;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;
