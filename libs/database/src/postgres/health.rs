use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::DatabaseError;

/// Check PostgreSQL database health.
///
/// Pings the connection pool; useful for readiness probes.
///
/// ```ignore
/// match database::postgres::check_health(&db).await {
///     Ok(_) => { /* ready */ }
///     Err(e) => { /* 503 */ }
/// }
/// ```
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");

    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("PostgreSQL ping failed: {}", e)))?;

    debug!("PostgreSQL health check passed");
    Ok(())
}
