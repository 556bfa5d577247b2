//! # autopanel
//!
//! Automatic parameter-editing panels for `egui`: give an object a name, an
//! ordered list of numeric parameter descriptors and an update routine, and
//! get back a panel of labeled sliders that keeps the object synchronized
//! with user edits.
//!
//! Data flows one way. The object declares its parameters, the panel builds
//! one control per parameter, and every user edit triggers a synchronization
//! pass that reads *all* current control values and hands the full vector to
//! the object's update routine.
//!
//! ## Crate Structure
//!
//! - **`bindable`**: the [`Bindable`] capability trait an application object
//!   implements to get a panel, plus the [`SharedBindable`] handle type.
//! - **`parameter`**: [`ParamDescriptor`] (name, bounds, optional step,
//!   initial value) and [`ParamKey`] addressing for programmatic writes.
//! - **`control`**: [`Control`], the retained state of one labeled slider.
//! - **`panel`**: [`ParamPanel`] and [`PanelBuilder`]; construction,
//!   synchronization passes, programmatic `set`, and egui rendering.
//! - **`host`**: the process-wide default container for floating panels,
//!   behind the [`host()`] accessor.
//! - **`error`**: [`PanelError`] and the [`PanelResult`] alias.
//!
//! ## Example
//!
//! ```
//! use autopanel::{shared, Bindable, ParamDescriptor, ParamPanel};
//!
//! struct Ball {
//!     params: Vec<ParamDescriptor>,
//!     radius: f64,
//!     speed: f64,
//! }
//!
//! impl Bindable for Ball {
//!     fn name(&self) -> &str {
//!         "Ball"
//!     }
//!     fn params(&self) -> &[ParamDescriptor] {
//!         &self.params
//!     }
//!     fn update(&mut self, values: &[f64]) {
//!         self.radius = values[0];
//!         self.speed = values[1];
//!     }
//! }
//!
//! let ball = shared(Ball {
//!     params: vec![
//!         ParamDescriptor::new("radius", 1.0, 10.0, 5.0),
//!         ParamDescriptor::new("speed", 0.0, 100.0, 20.0).with_step(5.0),
//!     ],
//!     radius: 0.0,
//!     speed: 0.0,
//! });
//!
//! // Construction runs one synchronization pass with the initial values.
//! let mut panel = ParamPanel::new(ball.clone())?;
//! assert_eq!(ball.lock().unwrap().params()[0].initial, 5.0);
//!
//! // Programmatic writes change the display only; an explicit update()
//! // pushes them into the object.
//! panel.set("speed", 50.0)?;
//! panel.update();
//! # Ok::<(), autopanel::PanelError>(())
//! ```
//!
//! Inside an `eframe` app, draw a panel with [`ParamPanel::ui`], or register
//! it with the [host](crate::host) and draw everything at once with
//! `autopanel::host().ui(ui)`.

pub mod bindable;
pub mod control;
pub mod error;
pub mod host;
pub mod panel;
pub mod parameter;

pub use bindable::{shared, Bindable, SharedBindable};
pub use control::Control;
pub use error::{PanelError, PanelResult};
pub use host::{host, PanelHandle, PanelHost};
pub use panel::{PanelBuilder, ParamPanel, DEFAULT_WIDTH};
pub use parameter::{ParamDescriptor, ParamKey};
