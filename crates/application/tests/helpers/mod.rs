mod mock_clients;

pub use mock_clients::*;
