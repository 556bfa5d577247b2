//! The parameter panel itself.
//!
//! [`ParamPanel`] binds one [`Bindable`] object to a column of slider
//! controls, one per declared parameter. Edits flow one way: any user edit
//! triggers a synchronization pass that reads *every* control (not just the
//! edited one) and hands the full vector to the object's update routine.
//!
//! Panels are built through [`PanelBuilder`]. `build()` yields a detached
//! panel the caller draws with [`ParamPanel::ui`]; `build_hosted()` registers
//! the panel with the process-wide [host](crate::host) so it floats in the
//! shared container.

use std::collections::HashSet;
use std::sync::PoisonError;

use log::{debug, trace};

use crate::bindable::SharedBindable;
use crate::control::Control;
use crate::error::{PanelError, PanelResult};
use crate::host::{self, PanelHandle};
use crate::parameter::{ParamDescriptor, ParamKey};

/// Default panel width in points.
pub const DEFAULT_WIDTH: f32 = 300.0;

/// Horizontal room left for the slider label within a control's share of the
/// panel width.
const CONTROL_MARGIN: f32 = 20.0;

/// Builder for [`ParamPanel`], in the usual fluent style.
///
/// # Example
///
/// ```no_run
/// # use autopanel::{shared, Bindable, PanelBuilder, ParamDescriptor};
/// # struct Ball { params: Vec<ParamDescriptor> }
/// # impl Bindable for Ball {
/// #     fn name(&self) -> &str { "Ball" }
/// #     fn params(&self) -> &[ParamDescriptor] { &self.params }
/// #     fn update(&mut self, _values: &[f64]) {}
/// # }
/// # let ball = Ball { params: vec![ParamDescriptor::new("radius", 1.0, 10.0, 5.0)] };
/// let panel = PanelBuilder::new(shared(ball))
///     .width(240.0)
///     .build()?;
/// # Ok::<(), autopanel::PanelError>(())
/// ```
pub struct PanelBuilder {
    object: SharedBindable,
    width: f32,
    width_divisor: u32,
}

impl PanelBuilder {
    /// Starts a builder with the default width and no row packing.
    pub fn new(object: SharedBindable) -> Self {
        Self {
            object,
            width: DEFAULT_WIDTH,
            width_divisor: 1,
        }
    }

    /// Panel width in points. Must be finite and positive.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Packs `divisor` controls per row, each sized to an equal share of the
    /// panel width. Must be at least 1.
    pub fn width_divisor(mut self, divisor: u32) -> Self {
        self.width_divisor = divisor;
        self
    }

    /// Builds a detached panel; the caller draws it with
    /// [`ParamPanel::ui`].
    ///
    /// Construction is fail-fast: layout and descriptor validation errors
    /// abort before any control exists, and the object has already been
    /// updated once with the initial values by the time this returns.
    pub fn build(self) -> PanelResult<ParamPanel> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PanelError::InvalidLayout(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if self.width_divisor == 0 {
            return Err(PanelError::InvalidLayout(
                "width divisor must be at least 1".to_string(),
            ));
        }

        let (title, params) = {
            let object = self
                .object
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            (object.name().to_string(), object.params().to_vec())
        };

        let mut seen = HashSet::new();
        for param in &params {
            param.validate()?;
            if !seen.insert(param.name.clone()) {
                return Err(PanelError::DuplicateParameter(param.name.clone()));
            }
        }

        let control_width = self.width / self.width_divisor as f32 - CONTROL_MARGIN;
        let controls = params
            .iter()
            .map(|param| {
                Control::from_descriptor(
                    param,
                    format!("{}-{}", title, param.name),
                    control_width,
                )
            })
            .collect::<Vec<_>>();

        let mut panel = ParamPanel {
            object: self.object,
            title,
            params,
            controls,
            width: self.width,
            width_divisor: self.width_divisor,
        };

        debug!(
            "built panel '{}' with {} controls",
            panel.title,
            panel.controls.len()
        );

        // The object sees the initial displayed values before any user
        // interaction.
        panel.update();
        Ok(panel)
    }

    /// Builds the panel and registers it with the process-wide
    /// [host](crate::host), the default placement for floating panels.
    pub fn build_hosted(self) -> PanelResult<PanelHandle> {
        Ok(host::host().register(self.build()?))
    }
}

/// A panel of labeled sliders bound to one object.
///
/// Invariant: the panel holds exactly one control per declared parameter, in
/// declared order, for its entire lifetime.
pub struct ParamPanel {
    object: SharedBindable,
    title: String,
    params: Vec<ParamDescriptor>,
    controls: Vec<Control>,
    width: f32,
    width_divisor: u32,
}

impl std::fmt::Debug for ParamPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamPanel")
            .field("title", &self.title)
            .field("params", &self.params)
            .field("controls", &self.controls)
            .field("width", &self.width)
            .field("width_divisor", &self.width_divisor)
            .finish_non_exhaustive()
    }
}

impl ParamPanel {
    /// Builds a detached panel with default width and no row packing.
    pub fn new(object: SharedBindable) -> PanelResult<Self> {
        PanelBuilder::new(object).build()
    }

    /// Starts a [`PanelBuilder`].
    pub fn builder(object: SharedBindable) -> PanelBuilder {
        PanelBuilder::new(object)
    }

    /// Panel heading, the bound object's name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The controls, in declared parameter order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// The parameter declaration snapshot taken at construction.
    pub fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }

    /// The synchronization pass: reads every control in declared order and
    /// hands the full vector to the object's update routine.
    ///
    /// This is the only path by which edits reach the object. Callable
    /// repeatedly; with unchanged control values the object just sees the
    /// same vector again.
    pub fn update(&mut self) {
        let values: Vec<f64> = self.controls.iter().map(Control::value).collect();
        trace!("sync '{}' <- {:?}", self.title, values);
        self.object
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .update(&values);
    }

    /// Programmatic write to one control's displayed value.
    ///
    /// Deliberately does *not* run a synchronization pass — the object is
    /// untouched until the next user edit or an explicit [`update`]. Callers
    /// that want the object to see the new value follow up with
    /// `panel.update()`.
    ///
    /// By-name addressing fails with [`PanelError::UnknownParameter`] when no
    /// declared parameter matches, leaving every control unchanged.
    ///
    /// # Panics
    ///
    /// An out-of-range [`ParamKey::ByIndex`] is a caller precondition
    /// violation and panics via slice indexing.
    ///
    /// [`update`]: ParamPanel::update
    pub fn set(&mut self, key: impl Into<ParamKey>, value: f64) -> PanelResult<()> {
        let index = match key.into() {
            ParamKey::ByIndex(index) => index,
            ParamKey::ByName(name) => self
                .params
                .iter()
                .position(|param| param.name == name)
                .ok_or(PanelError::UnknownParameter(name))?,
        };
        self.controls[index].set(value);
        Ok(())
    }

    /// The change-notification path: writes one control's value, then runs
    /// exactly one synchronization pass — what a user edit on the slider
    /// does. Useful for headless drivers and tests.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range, like [`ParamKey::ByIndex`].
    pub fn input(&mut self, index: usize, value: f64) {
        self.controls[index].set(value);
        self.update();
    }

    /// Draws the panel: a sized box, the heading, then one slider per
    /// parameter. Any edit this frame triggers exactly one synchronization
    /// pass, after every control has been drawn.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut edited = false;

        ui.group(|ui| {
            ui.set_width(self.width);
            ui.vertical(|ui| {
                ui.heading(&self.title);
                ui.separator();
                if self.width_divisor > 1 {
                    // Packed layout: heading on its own row, controls wrap.
                    ui.horizontal_wrapped(|ui| {
                        for control in &mut self.controls {
                            edited |= control.ui(ui);
                        }
                    });
                } else {
                    for control in &mut self.controls {
                        edited |= control.ui(ui);
                    }
                }
            });
        });

        if edited {
            self.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindable::{shared, Bindable};
    use std::sync::{Arc, Mutex};

    /// Records every update vector it receives.
    struct Recorder {
        name: String,
        params: Vec<ParamDescriptor>,
        calls: Arc<Mutex<Vec<Vec<f64>>>>,
    }

    impl Bindable for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn params(&self) -> &[ParamDescriptor] {
            &self.params
        }

        fn update(&mut self, values: &[f64]) {
            self.calls.lock().unwrap().push(values.to_vec());
        }
    }

    fn ball() -> (SharedBindable, Arc<Mutex<Vec<Vec<f64>>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let object = Recorder {
            name: "Ball".to_string(),
            params: vec![
                ParamDescriptor::new("radius", 1.0, 10.0, 5.0),
                ParamDescriptor::new("speed", 0.0, 100.0, 20.0).with_step(5.0),
            ],
            calls: calls.clone(),
        };
        (shared(object), calls)
    }

    #[test]
    fn one_control_per_parameter_in_declared_order() {
        let (object, _calls) = ball();
        let panel = ParamPanel::new(object).unwrap();
        assert_eq!(panel.controls().len(), 2);
        assert_eq!(panel.controls()[0].label(), "radius");
        assert_eq!(panel.controls()[1].label(), "speed");
    }

    #[test]
    fn construction_syncs_initial_values_once() {
        let (object, calls) = ball();
        let _panel = ParamPanel::new(object).unwrap();
        assert_eq!(*calls.lock().unwrap(), vec![vec![5.0, 20.0]]);
    }

    #[test]
    fn control_ids_derive_from_object_and_parameter_names() {
        let (object, _calls) = ball();
        let panel = ParamPanel::new(object).unwrap();
        assert_eq!(panel.controls()[0].id(), "Ball-radius");
        assert_eq!(panel.controls()[1].id(), "Ball-speed");
    }

    #[test]
    fn input_runs_one_pass_with_all_current_values() {
        let (object, calls) = ball();
        let mut panel = ParamPanel::new(object).unwrap();
        panel.input(0, 7.0);
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], vec![7.0, 20.0]);
    }

    #[test]
    fn set_by_name_changes_display_without_syncing() {
        let (object, calls) = ball();
        let mut panel = ParamPanel::new(object).unwrap();
        panel.set("speed", 50.0).unwrap();
        assert_eq!(panel.controls()[1].value(), 50.0);
        // Only the construction-time pass has run.
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn set_by_unknown_name_errors_and_leaves_values_alone() {
        let (object, _calls) = ball();
        let mut panel = ParamPanel::new(object).unwrap();
        let err = panel.set("spin", 1.0).unwrap_err();
        assert_eq!(err, PanelError::UnknownParameter("spin".to_string()));
        assert_eq!(panel.controls()[0].value(), 5.0);
        assert_eq!(panel.controls()[1].value(), 20.0);
    }

    #[test]
    fn set_by_index_writes_the_addressed_control() {
        let (object, _calls) = ball();
        let mut panel = ParamPanel::new(object).unwrap();
        panel.set(0, 2.5).unwrap();
        assert_eq!(panel.controls()[0].value(), 2.5);
    }

    #[test]
    #[should_panic]
    fn set_by_out_of_range_index_panics() {
        let (object, _calls) = ball();
        let mut panel = ParamPanel::new(object).unwrap();
        let _ = panel.set(9, 1.0);
    }

    #[test]
    fn explicit_update_pushes_programmatic_sets_through() {
        let (object, calls) = ball();
        let mut panel = ParamPanel::new(object).unwrap();
        panel.set("radius", 7.0).unwrap();
        panel.update();
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], vec![7.0, 20.0]);
    }

    #[test]
    fn duplicate_parameter_names_fail_construction() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let object = Recorder {
            name: "Twins".to_string(),
            params: vec![
                ParamDescriptor::new("x", 0.0, 1.0, 0.0),
                ParamDescriptor::new("x", 0.0, 2.0, 0.0),
            ],
            calls: calls.clone(),
        };
        let err = ParamPanel::new(shared(object)).unwrap_err();
        assert_eq!(err, PanelError::DuplicateParameter("x".to_string()));
        // Fail-fast: the object never saw an update.
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn malformed_descriptor_fails_construction() {
        let object = Recorder {
            name: "Broken".to_string(),
            params: vec![ParamDescriptor::new("w", 5.0, 1.0, 2.0)],
            calls: Arc::new(Mutex::new(Vec::new())),
        };
        assert!(matches!(
            ParamPanel::new(shared(object)),
            Err(PanelError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn zero_width_divisor_is_rejected() {
        let (object, _calls) = ball();
        let err = PanelBuilder::new(object).width_divisor(0).build().unwrap_err();
        assert!(matches!(err, PanelError::InvalidLayout(_)));
    }

    #[test]
    fn non_positive_width_is_rejected() {
        let (object, _calls) = ball();
        let err = PanelBuilder::new(object).width(0.0).build().unwrap_err();
        assert!(matches!(err, PanelError::InvalidLayout(_)));
    }

    #[test]
    fn empty_parameter_list_builds_an_empty_panel() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let object = Recorder {
            name: "Inert".to_string(),
            params: Vec::new(),
            calls: calls.clone(),
        };
        let panel = ParamPanel::new(shared(object)).unwrap();
        assert!(panel.controls().is_empty());
        // The initial pass still runs, with an empty vector.
        assert_eq!(*calls.lock().unwrap(), vec![Vec::<f64>::new()]);
    }
}
