//! The bound-object capability.
//!
//! [`Bindable`] is the explicit interface an application object implements to
//! get an automatic panel: a display name, an ordered parameter declaration,
//! and an update routine that receives the full parameter vector. Parameter
//! order is significant; `update` is always called with one value per
//! declared parameter, in declared order.

use std::sync::{Arc, Mutex};

use crate::parameter::ParamDescriptor;

/// An object whose numeric parameters are edited through a panel.
pub trait Bindable: Send {
    /// Display name; becomes the panel heading and the id prefix of every
    /// control.
    fn name(&self) -> &str;

    /// Ordered parameter declaration. Must not change while a panel is bound
    /// to this object; the panel snapshots it at construction.
    fn params(&self) -> &[ParamDescriptor];

    /// Receives the current value of every parameter, in declared order.
    /// `values.len()` always equals `self.params().len()`.
    fn update(&mut self, values: &[f64]);
}

/// Shared handle to a bindable object.
///
/// The panel does not own the object; it holds one of these and locks it
/// only for the duration of a synchronization pass.
pub type SharedBindable = Arc<Mutex<dyn Bindable>>;

/// Wraps an object in a [`SharedBindable`] handle.
pub fn shared<B: Bindable + 'static>(object: B) -> SharedBindable {
    Arc::new(Mutex::new(object))
}
