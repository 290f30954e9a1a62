mod notify;

pub use notify::{DispatchAck, DispatchError, NotifyClient};
