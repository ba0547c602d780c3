use crate::config::AppConfig;
use crate::errors::AppResult;
use azure_storage::prelude::*;
use azure_storage::shared_access_signature::service_sas::BlobSasPermissions;
use azure_storage::shared_access_signature::SasToken;
use azure_storage_blobs::prelude::*;
use time::{Duration, OffsetDateTime};
use tracing::debug;

/// Permissions granted to the container SAS.
fn sas_permissions() -> BlobSasPermissions {
    BlobSasPermissions {
        read: true,
        write: true,
        delete: true,
        list: true,
        ..Default::default()
    }
}

/// Computes the SAS validity window around an issuance instant.
///
/// The window opens before `now` so clock skew between this host and the
/// storage service cannot make a fresh token invalid.
pub(crate) fn sas_window(
    now: OffsetDateTime,
    start_offset_hours: i64,
    expiry_hours: i64,
) -> (OffsetDateTime, OffsetDateTime) {
    (
        now - Duration::hours(start_offset_hours),
        now + Duration::hours(expiry_hours),
    )
}

/// Returns a [`ContainerClient`] authorized by a freshly generated container SAS.
///
/// The SAS is created per run from the account key and never persisted.
///
/// # Errors
///
/// Returns `StorageError` if SAS generation or signing fails (e.g. a key that
/// is not valid base64).
pub async fn authenticate(config: &AppConfig) -> AppResult<ContainerClient> {
    let account = config.resolved.account_name.clone();
    let container = config.resolved.container_name.clone();

    let key_credentials =
        StorageCredentials::access_key(account.clone(), config.account_key().to_string());
    let service = BlobServiceClient::new(account.clone(), key_credentials);

    let (start, expiry) = sas_window(
        OffsetDateTime::now_utc(),
        config.resolved.sas_start_offset_hours,
        config.resolved.sas_expiry_hours,
    );
    let sas = service
        .container_client(container.clone())
        .shared_access_signature(sas_permissions(), expiry)
        .await?
        .start(start);
    let token = sas.token()?;
    debug!(container = %container, "Generated container SAS");

    let sas_credentials = StorageCredentials::sas_token(token)?;
    Ok(BlobServiceClient::new(account, sas_credentials).container_client(container))
}

#[cfg(test)]
mod tests {
    use super::{sas_permissions, sas_window};
    use time::macros::datetime;
    use time::Duration;

    #[test]
    fn sas_window_straddles_issuance_instant() {
        let now = datetime!(2024-03-07 12:00 UTC);
        let (start, expiry) = sas_window(now, 1, 24);

        assert!(start < now);
        assert!(expiry > now);
        assert_eq!(now - start, Duration::hours(1));
        assert_eq!(expiry - now, Duration::hours(24));
    }

    #[test]
    fn sas_window_honors_configured_offsets() {
        let now = datetime!(2024-03-07 00:30 UTC);
        let (start, expiry) = sas_window(now, 2, 48);

        assert_eq!(start, datetime!(2024-03-06 22:30 UTC));
        assert_eq!(expiry, datetime!(2024-03-09 00:30 UTC));
    }

    #[test]
    fn sas_permissions_grant_read_write_delete_list() {
        let permissions = sas_permissions();
        assert!(permissions.read);
        assert!(permissions.write);
        assert!(permissions.delete);
        assert!(permissions.list);
        assert!(!permissions.tags);
    }
}
