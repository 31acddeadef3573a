pub mod db;
pub mod gateway;
pub mod rest_gateway;
pub mod sqlite_gateway;

pub use gateway::{connect, DataGateway, GatewayError};
