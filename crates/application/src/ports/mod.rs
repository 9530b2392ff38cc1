mod clock;
mod compute_client;
mod identity_client;

pub use clock::{Clock, SystemClock};
pub use compute_client::ComputeClient;
pub use identity_client::IdentityClient;
