use std::{future::Future, rc::Rc};

use leptos::*;

use tripboard_core::ViewController;
use tripboard_frontend_api::PublicApi;

use crate::{chart::ChartJs, components::LeafletLayer, view::SignalView};

pub type Controller = ViewController<PublicApi, SignalView, LeafletLayer, ChartJs>;

/// Gives components access to the controller once the map is mounted.
#[derive(Clone, Copy)]
pub struct ControllerHandle(StoredValue<Option<Rc<Controller>>>);

impl ControllerHandle {
    pub fn new() -> Self {
        Self(StoredValue::new(None))
    }

    pub fn set(self, controller: Rc<Controller>) {
        self.0.set_value(Some(controller));
    }

    fn get(self) -> Option<Rc<Controller>> {
        let controller = self.0.get_value();
        if controller.is_none() {
            log::warn!("The map is not ready yet");
        }
        controller
    }

    /// Runs an asynchronous controller operation.
    pub fn spawn<F, Fut>(self, f: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(controller) = self.get() {
            spawn_local(f(controller));
        }
    }

    pub fn with(self, f: impl FnOnce(&Controller)) {
        if let Some(controller) = self.get() {
            f(&controller);
        }
    }
}

pub fn use_controller() -> ControllerHandle {
    expect_context::<ControllerHandle>()
}
