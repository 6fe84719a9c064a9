//! Outbound messages and the links that hand them off.
//!
//! Nothing here sends anything: the storefront only composes a message and
//! a URL for the messaging app or mail client to open.

mod link;
mod message;

pub use link::{build_external_link, decode_message, mailto_link, MessagingTarget};
pub use message::{product_message, Greeting};
