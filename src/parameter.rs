//! Parameter descriptors and addressing.
//!
//! A [`ParamDescriptor`] is the declarative description of one editable
//! numeric parameter on a bindable object: a name, a closed range, an
//! optional slider step and an initial value. Descriptors are immutable for
//! the lifetime of any panel built over them; the panel snapshots them at
//! construction.
//!
//! [`ParamKey`] is the explicit, type-checked form of parameter addressing
//! used by [`ParamPanel::set`](crate::ParamPanel::set): a parameter is named
//! either by its position in the declared sequence or by its declared name,
//! never by a runtime type branch.

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, PanelResult};

/// A slider with no declared step divides its range into this many notches.
const DEFAULT_STEP_DIVISIONS: f64 = 30.0;

/// Description of one editable numeric parameter.
///
/// # Example
///
/// ```
/// use autopanel::ParamDescriptor;
///
/// let radius = ParamDescriptor::new("radius", 1.0, 10.0, 5.0);
/// let speed = ParamDescriptor::new("speed", 0.0, 100.0, 20.0).with_step(5.0);
///
/// // Default step divides the range into 30 notches.
/// assert_eq!(ParamDescriptor::new("x", 0.0, 30.0, 0.0).effective_step(), 1.0);
/// assert_eq!(speed.effective_step(), 5.0);
/// # let _ = radius;
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Parameter name; labels the slider and is the by-name address.
    pub name: String,
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Slider step. `None` means the default of `(max - min) / 30`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Value the control starts at.
    pub initial: f64,
}

impl ParamDescriptor {
    /// Creates a descriptor with the default step.
    pub fn new(name: impl Into<String>, min: f64, max: f64, initial: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            step: None,
            initial,
        }
    }

    /// Declares an explicit slider step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// The step a control built from this descriptor uses.
    pub fn effective_step(&self) -> f64 {
        self.step
            .unwrap_or((self.max - self.min) / DEFAULT_STEP_DIVISIONS)
    }

    /// Checks the descriptor for structural malformation.
    ///
    /// Rejects non-finite bounds, an inverted range, and a declared step that
    /// is not finite and positive. An initial value outside `[min, max]` is
    /// allowed; the slider clamps it on first interaction.
    pub fn validate(&self) -> PanelResult<()> {
        let fail = |reason: &str| {
            Err(PanelError::InvalidDescriptor {
                name: self.name.clone(),
                reason: reason.to_string(),
            })
        };

        if !self.min.is_finite() {
            return fail("min is not finite");
        }
        if !self.max.is_finite() {
            return fail("max is not finite");
        }
        if self.min > self.max {
            return fail("min is greater than max");
        }
        if !self.initial.is_finite() {
            return fail("initial value is not finite");
        }
        if let Some(step) = self.step {
            if !step.is_finite() || step <= 0.0 {
                return fail("step must be finite and positive");
            }
        }
        Ok(())
    }
}

/// Address of a parameter on a panel.
///
/// Replaces string-or-index runtime polymorphism with an explicit tagged
/// variant. `From` conversions keep call sites short:
/// `panel.set(1, v)` and `panel.set("speed", v)` both work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKey {
    /// Position in the object's declared parameter sequence.
    ByIndex(usize),
    /// Declared parameter name.
    ByName(String),
}

impl From<usize> for ParamKey {
    fn from(index: usize) -> Self {
        ParamKey::ByIndex(index)
    }
}

impl From<&str> for ParamKey {
    fn from(name: &str) -> Self {
        ParamKey::ByName(name.to_string())
    }
}

impl From<String> for ParamKey {
    fn from(name: String) -> Self {
        ParamKey::ByName(name)
    }
}
