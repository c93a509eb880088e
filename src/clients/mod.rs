pub mod order_client;
pub mod transport;

pub use order_client::OrderClient;
pub use transport::{HttpTransport, OrderTransport, RawResponse};
