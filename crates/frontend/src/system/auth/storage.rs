use crate::shared::config::{STORAGE_CURRENT_ORG_KEY, STORAGE_ORGS_KEY};
use crate::shared::storage;
use contracts::domain::a006_organization::{Organization, OrganizationRegistry};

/// Loads the registered organizations. Malformed JSON loads as an empty registry.
pub fn load_registry() -> OrganizationRegistry {
    let raw = storage::get_item(STORAGE_ORGS_KEY);
    match OrganizationRegistry::from_json(raw.as_deref()) {
        Ok(registry) => registry,
        Err(e) => {
            log::warn!("Ignoring malformed '{}' in storage: {}", STORAGE_ORGS_KEY, e);
            OrganizationRegistry::default()
        }
    }
}

pub fn save_registry(registry: &OrganizationRegistry) -> Result<(), String> {
    let raw = registry
        .to_json()
        .map_err(|e| format!("Failed to serialize organizations: {}", e))?;
    storage::set_item(STORAGE_ORGS_KEY, &raw)
}

pub fn load_current_org() -> Option<Organization> {
    match storage::get_json::<Organization>(STORAGE_CURRENT_ORG_KEY)? {
        Ok(org) => Some(org),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

pub fn save_current_org(org: &Organization) -> Result<(), String> {
    storage::set_json(STORAGE_CURRENT_ORG_KEY, org)
}

pub fn clear_current_org() {
    storage::remove_item(STORAGE_CURRENT_ORG_KEY);
}
