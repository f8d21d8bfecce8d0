//! Supervises gateway launch sequencing.

use std::sync::Arc;

use tracing::info;

use crate::StructuredHealthReporter;
use crate::bootstrap::{ConfigLoader, SystemConfigLoader, bootstrap_with};
use crate::events::{BusSubscriber, EventSubscriber};
use crate::health::HealthReporter;
use crate::remote::{GrpcConnector, RemoteConnector};

use super::PROCESS_TARGET;
use super::errors::LaunchError;
use super::shutdown::{InterruptWatcher, SystemInterruptWatcher};

/// Collaborators required to launch the gateway.
pub(crate) struct LaunchPlan<L, C, S, I> {
    pub(crate) loader: L,
    pub(crate) reporter: Arc<dyn HealthReporter>,
    pub(crate) connector: C,
    pub(crate) subscriber: S,
    pub(crate) interrupts: I,
}

/// Runs the gateway using the production collaborators.
///
/// Returns once a client sends the stop command.
///
/// # Errors
///
/// Returns a [`LaunchError`] when startup fails or the listener dies.
pub fn run_gateway() -> Result<(), LaunchError> {
    run_gateway_with(LaunchPlan {
        loader: SystemConfigLoader,
        reporter: Arc::new(StructuredHealthReporter::new()),
        connector: GrpcConnector,
        subscriber: BusSubscriber,
        interrupts: SystemInterruptWatcher,
    })
}

/// Runs the gateway with injected collaborators.
pub(crate) fn run_gateway_with<L, C, S, I>(plan: LaunchPlan<L, C, S, I>) -> Result<(), LaunchError>
where
    L: ConfigLoader,
    C: RemoteConnector,
    S: EventSubscriber,
    I: InterruptWatcher,
{
    let LaunchPlan {
        loader,
        reporter,
        connector,
        subscriber,
        interrupts,
    } = plan;

    let gateway = bootstrap_with(&loader, reporter, &connector, &subscriber)?;
    interrupts.install()?;
    info!(
        target: PROCESS_TARGET,
        address = %gateway.local_addr(),
        "serving commands"
    );
    gateway.serve()?;
    info!(target: PROCESS_TARGET, "gateway stopped");
    Ok(())
}
