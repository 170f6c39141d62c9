use crate::module::{Module, ModuleHandler};
use ferrous_recon_application::use_cases::{ReconcileTargetsUseCase, ShowTargetsUseCase};
use ferrous_recon_domain::{AddressTable, DomainError, LifecycleError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::Mutex as AsyncMutex;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Periodically reads the ARP cache to track hosts joining and leaving the
/// network, and keeps the session's target pool in sync.
pub struct NetReconModule {
    reconcile: Arc<ReconcileTargetsUseCase>,
    show_targets: Arc<ShowTargetsUseCase>,
    interval: Duration,
    previous: Arc<AsyncMutex<Option<AddressTable>>>,
    shutdown: Mutex<Option<CancellationToken>>,
}

impl NetReconModule {
    pub fn new(
        reconcile: Arc<ReconcileTargetsUseCase>,
        show_targets: Arc<ShowTargetsUseCase>,
    ) -> Self {
        Self {
            reconcile,
            show_targets,
            interval: Duration::from_secs(1),
            previous: Arc::new(AsyncMutex::new(None)),
            shutdown: Mutex::new(None),
        }
    }

    /// Intervals below 10ms are raised to 10ms
    pub fn with_interval(mut self, interval: Duration) -> Self {
        if interval < MIN_INTERVAL {
            warn!(
                requested_ms = interval.as_millis() as u64,
                min_ms = MIN_INTERVAL.as_millis() as u64,
                "Discovery interval too short, clamping"
            );
        }
        self.interval = interval.max(MIN_INTERVAL);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn show(&self) -> Result<(), DomainError> {
        self.show_targets.execute();
        Ok(())
    }

    fn shutdown_slot(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.shutdown.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Module for NetReconModule {
    fn name(&self) -> &'static str {
        "Network Recon"
    }

    fn description(&self) -> &'static str {
        "Read periodically the ARP cache in order to monitor for new hosts on the network."
    }

    fn author(&self) -> &'static str {
        "Ferrous Recon contributors"
    }

    fn handlers(self: Arc<Self>) -> Result<Vec<ModuleHandler>, DomainError> {
        let toggle = Arc::clone(&self);
        let show = self;

        Ok(vec![
            ModuleHandler::new(
                "net.recon (on|off)",
                r"^net\.recon\s+(on|off)$",
                "Start/stop network hosts discovery in background.",
                move |args| {
                    match args.first().map(String::as_str) {
                        Some("on") => toggle.start()?,
                        _ => toggle.stop()?,
                    }
                    Ok(())
                },
            )?,
            ModuleHandler::new(
                "net.show",
                r"^net\.show$",
                "Show current hosts list.",
                move |_| show.show(),
            )?,
        ])
    }

    fn start(&self) -> Result<(), LifecycleError> {
        let mut slot = self.shutdown_slot();
        if slot.is_some() {
            return Err(LifecycleError::AlreadyRunning(self.name()));
        }

        let token = CancellationToken::new();
        tokio::spawn(run_discovery(
            Arc::clone(&self.reconcile),
            Arc::clone(&self.previous),
            self.interval,
            token.clone(),
        ));
        *slot = Some(token);

        Ok(())
    }

    fn stop(&self) -> Result<(), LifecycleError> {
        match self.shutdown_slot().take() {
            Some(token) => {
                token.cancel();
                Ok(())
            }
            None => Err(LifecycleError::AlreadyStopped(self.name())),
        }
    }

    fn is_running(&self) -> bool {
        self.shutdown_slot().is_some()
    }
}

async fn run_discovery(
    reconcile: Arc<ReconcileTargetsUseCase>,
    previous: Arc<AsyncMutex<Option<AddressTable>>>,
    interval: Duration,
    shutdown: CancellationToken,
) {
    info!(interval_ms = interval.as_millis() as u64, "Network discovery started");

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                info!("Network discovery stopped");
                break;
            }
            _ = ticker.tick() => {
                // One cycle at a time, even while a stopped loop drains
                let mut previous = previous.lock().await;
                match reconcile.execute(previous.as_ref()).await {
                    Ok(outcome) => *previous = Some(outcome.snapshot),
                    Err(e) => error!(error = %e, "Network discovery cycle failed"),
                }
            }
        }
    }
}
