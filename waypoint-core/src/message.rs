//! Message trait for values that flow through hooks and listeners.

/// A marker trait for events and triggers within the system.
///
/// Messages must be `Send + Sync + 'static` so a navigator and its observers
/// can be moved between threads as a unit.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct Tapped { cta: String }
///
/// impl Message for Tapped {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "All messages in Waypoint must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

impl Message for () {}
impl Message for String {}
impl Message for &'static str {}
impl Message for url::Url {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}
impl<T: Message> Message for Vec<T> {}
impl<T: Message> Message for Option<T> {}
