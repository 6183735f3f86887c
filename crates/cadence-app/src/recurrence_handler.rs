use salvo::async_trait;

use crate::error::AppResult;
use cadence_core::error::CoreError;
use cadence_recur::OccurrenceGenerator;

/// Injects the occurrence generator (horizon and id source) into the depot.
pub struct OccurrenceGeneratorHandler {
    pub generator: OccurrenceGenerator,
}

#[async_trait]
impl salvo::Handler for OccurrenceGeneratorHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // Clones share the underlying id source.
        depot.inject(self.generator.clone());
    }
}

/// ## Summary
/// Retrieves the occurrence generator from the depot.
///
/// ## Errors
/// Returns an error if no generator was injected.
pub fn get_generator_from_depot(depot: &salvo::Depot) -> AppResult<OccurrenceGenerator> {
    depot
        .obtain::<OccurrenceGenerator>()
        .cloned()
        .map_err(|_err| {
            CoreError::InvariantViolation("Occurrence generator not found in depot").into()
        })
}
