use std::net::IpAddr;

/// Terminal outcome of the override pipeline for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// A matching inventory address was found (or served from cache).
    Answered { address: IpAddr, cached: bool },

    /// Query is outside the configured domains/record types; the caller
    /// should hand it to the next resolver untouched.
    NotHandled,

    /// Query was ours to answer but the inventory has no eligible address;
    /// the caller should fall through to the next resolver.
    NotFound,
}
