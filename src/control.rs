//! Retained state for a single slider control.

use egui::Slider;

use crate::parameter::ParamDescriptor;

/// One labeled numeric slider.
///
/// Holds the displayed value between frames. [`Control::set`] writes the
/// display value only; routing an edit into the bound object is the panel's
/// job (see [`ParamPanel::update`](crate::ParamPanel::update)).
#[derive(Clone, Debug)]
pub struct Control {
    label: String,
    id: String,
    min: f64,
    max: f64,
    step: f64,
    width: f32,
    value: f64,
}

impl Control {
    /// Builds a control from a descriptor.
    ///
    /// `id` must be stable and unique per object+parameter pair; the panel
    /// derives it as `"{objectName}-{paramName}"` so external addressing
    /// (styling and test hooks) stays reproducible.
    pub(crate) fn from_descriptor(descriptor: &ParamDescriptor, id: String, width: f32) -> Self {
        Self {
            label: descriptor.name.clone(),
            id,
            min: descriptor.min,
            max: descriptor.max,
            step: descriptor.effective_step(),
            width,
            value: descriptor.initial,
        }
    }

    /// Current displayed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Programmatic write. Changes the display value only; does not run a
    /// synchronization pass.
    pub fn set(&mut self, value: f64) {
        self.value = value;
    }

    /// Label shown next to the slider.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stable widget id, `"{objectName}-{paramName}"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Slider step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Inclusive bounds.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Draws the slider. Returns true when the user edited the value this
    /// frame.
    pub(crate) fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        ui.push_id(self.id.as_str(), |ui| {
            ui.spacing_mut().slider_width = self.width.max(0.0);
            ui.add(
                Slider::new(&mut self.value, self.min..=self.max)
                    .text(self.label.as_str())
                    .step_by(self.step),
            )
            .changed()
        })
        .inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_descriptor_applies_initial_and_effective_step() {
        let d = ParamDescriptor::new("radius", 1.0, 10.0, 5.0);
        let c = Control::from_descriptor(&d, "Ball-radius".into(), 280.0);
        assert_eq!(c.value(), 5.0);
        assert_eq!(c.range(), (1.0, 10.0));
        assert!((c.step() - 0.3).abs() < 1e-12);
        assert_eq!(c.id(), "Ball-radius");
        assert_eq!(c.label(), "radius");
    }

    #[test]
    fn set_changes_display_value_only() {
        let d = ParamDescriptor::new("speed", 0.0, 100.0, 20.0).with_step(5.0);
        let mut c = Control::from_descriptor(&d, "Ball-speed".into(), 280.0);
        c.set(50.0);
        assert_eq!(c.value(), 50.0);
    }
}
