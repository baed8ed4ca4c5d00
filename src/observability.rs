use std::sync::{Mutex, OnceLock, PoisonError};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static INSTALLING: Mutex<()> = Mutex::new(());

/// Installs the process-wide Prometheus recorder. Later calls, concurrent
/// ones included, return the handle installed first.
pub fn install() -> Result<&'static PrometheusHandle, BuildError> {
    let _guard = INSTALLING.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(handle) = HANDLE.get() {
        return Ok(handle);
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(HANDLE.get_or_init(|| handle))
}

/// Prometheus text exposition of every metric recorded so far; empty until
/// [`install`] ran.
pub fn render() -> String {
    HANDLE.get().map(PrometheusHandle::render).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::instrument::Instrument;
    use crate::domain::errors::ServiceError;

    #[test]
    fn observed_calls_show_up_in_the_exposition() {
        install().expect("recorder install failed");
        assert!(install().is_ok());

        let instrument = Instrument::new("exposition_check_service");
        let _: Result<(), ServiceError> = instrument.observe("find_all", |_| Ok(()));

        let text = render();
        assert!(text.contains("exposition_check_service_request_total"));
        assert!(text.contains("method=\"find_all\""));
        assert!(text.contains("status=\"success\""));
    }

    #[test]
    fn concurrent_installs_share_one_recorder() {
        let handles: Vec<usize> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| install().map(|handle| handle as *const _ as usize)))
                .collect();
            workers
                .into_iter()
                .map(|worker| worker.join().unwrap().expect("recorder install failed"))
                .collect()
        });
        assert!(handles.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
