//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_auth_gateway;
mod http_role_gateway;
mod in_memory_role_gateway;
mod remote_status;
mod static_auth_gateway;

pub use http_auth_gateway::HttpAuthGateway;
pub use http_role_gateway::HttpRoleGateway;
pub use in_memory_role_gateway::InMemoryRoleGateway;
pub use static_auth_gateway::StaticAuthGateway;
