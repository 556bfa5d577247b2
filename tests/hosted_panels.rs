//! Panel-host singleton behavior. These tests touch process-global state, so
//! they run serially.

use std::sync::{Arc, Mutex};

use autopanel::{host, shared, Bindable, PanelBuilder, ParamDescriptor};
use serial_test::serial;

struct Knob {
    params: Vec<ParamDescriptor>,
    last: Arc<Mutex<Vec<f64>>>,
}

impl Knob {
    fn new() -> (Self, Arc<Mutex<Vec<f64>>>) {
        let last = Arc::new(Mutex::new(Vec::new()));
        let knob = Self {
            params: vec![ParamDescriptor::new("gain", 0.0, 1.0, 0.5)],
            last: last.clone(),
        };
        (knob, last)
    }
}

impl Bindable for Knob {
    fn name(&self) -> &str {
        "Knob"
    }

    fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }

    fn update(&mut self, values: &[f64]) {
        *self.last.lock().unwrap() = values.to_vec();
    }
}

#[test]
#[serial]
fn host_is_a_process_wide_singleton() {
    assert!(std::ptr::eq(host(), host()));
}

#[test]
#[serial]
fn build_hosted_appends_to_the_host() {
    let before = host().len();
    let (knob, _last) = Knob::new();
    let _handle = PanelBuilder::new(shared(knob)).build_hosted().unwrap();
    assert_eq!(host().len(), before + 1);
    assert!(!host().is_empty());
}

#[test]
#[serial]
fn hosted_panels_stay_addressable_through_their_handle() {
    let (knob, last) = Knob::new();
    let handle = PanelBuilder::new(shared(knob)).build_hosted().unwrap();

    // Construction synced the initial value.
    assert_eq!(*last.lock().unwrap(), vec![0.5]);

    let mut panel = handle.lock().unwrap();
    panel.set("gain", 0.9).unwrap();
    panel.update();
    assert_eq!(*last.lock().unwrap(), vec![0.9]);
}
