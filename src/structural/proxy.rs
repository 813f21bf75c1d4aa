//! Proxy: `ServiceProxy` stands in for `RealService`, checks access first
//! and only builds the real service on the first permitted call.

use crate::console::Console;

pub trait Service {
    fn perform_action(&mut self, out: &dyn Console);
}

#[derive(Debug, Default)]
pub struct RealService;

impl Service for RealService {
    fn perform_action(&mut self, out: &dyn Console) {
        out.line("Action performed!");
    }
}

#[derive(Debug)]
pub struct ServiceProxy {
    real: Option<RealService>,
    has_access: bool,
}

impl ServiceProxy {
    pub fn new(has_access: bool) -> Self {
        ServiceProxy {
            real: None,
            has_access,
        }
    }

    /// Whether the real service has been created yet.
    pub fn is_initialized(&self) -> bool {
        self.real.is_some()
    }
}

impl Service for ServiceProxy {
    fn perform_action(&mut self, out: &dyn Console) {
        if !self.has_access {
            tracing::info!("proxy refused call without access");
            out.line("Access denied.");
            return;
        }
        self.real
            .get_or_insert_with(|| {
                tracing::debug!("creating real service on first use");
                RealService
            })
            .perform_action(out);
    }
}

pub fn demo(out: &dyn Console) {
    let mut services: Vec<Box<dyn Service>> = vec![
        Box::new(ServiceProxy::new(false)),
        Box::new(ServiceProxy::new(true)),
    ];
    for service in services.iter_mut() {
        service.perform_action(out);
    }
}
